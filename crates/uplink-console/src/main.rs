use uplink_console::{build_cli, run};

#[tokio::main]
async fn main() {
    let matches = build_cli().get_matches();

    match run(&matches).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    }
}
