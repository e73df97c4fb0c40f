use tracker_api::endpoints::TransactionId;
use tracker_api::{Client, Request, TrackerApiError};

#[tokio::main]
pub async fn main() -> Result<(), TrackerApiError> {
    let client = Client::new("http://localhost:8000", "csrf_token")?;

    let req = Request::transactions().delete(TransactionId::new(1));

    let _ack = client.mutate(req).await?;
    let _analytics = client.send(Request::analytics().summary()).await?;
    Ok(())
}
