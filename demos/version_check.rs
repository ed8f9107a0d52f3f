// Example client for the member version check
// Start a server with `member-rpc serve`, then run: cargo run --example version_check

use member_rpc::rpc::RpcClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Connecting to member RPC server...");

    let mut client = RpcClient::connect("127.0.0.1", 50051).await?;
    println!("Connected to {}! Calling GetVersion...", client.address());

    let version = client.get_version().await?;
    println!("Member service version: {}", version);

    let reply = client.send(r#"{"hello":"member"}"#).await?;
    println!("Echoed payload: {}", reply);

    client.close();
    Ok(())
}
