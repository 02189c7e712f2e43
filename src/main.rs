use receipt_processor::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("receipt processor error: {err}");
        std::process::exit(1);
    }
}
