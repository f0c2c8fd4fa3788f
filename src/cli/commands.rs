use crate::api::{MediaType, SeerrClient};
use crate::error::Result;
use crate::output;

/// Handle the search command
pub async fn search(client: &SeerrClient, query: &str) -> Result<()> {
    let results = client.search(query).await?;
    println!("{}", output::render_search(&results)?);
    Ok(())
}

/// Handle the add_movie command
pub async fn add_movie(client: &SeerrClient, media_id: i64) -> Result<()> {
    let message = client.add_request(MediaType::Movie, media_id, &[]).await?;
    println!("{}", message);
    Ok(())
}

/// Handle the add_tv command
pub async fn add_tv(client: &SeerrClient, media_id: i64, seasons: &[u32]) -> Result<()> {
    let message = client.add_request(MediaType::Tv, media_id, seasons).await?;
    println!("{}", message);
    Ok(())
}

/// Handle the get_available command
pub async fn get_available(
    client: &SeerrClient,
    media_type: MediaType,
    media_id: i64,
) -> Result<()> {
    let status = client.get_available(media_type, media_id).await?;
    println!("{}", output::render_status(&status)?);
    Ok(())
}
