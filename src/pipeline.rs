// The core loop: validate each record, publish its raw bytes, log the ids.
// The first failure stops the loop; messages already sent stay sent.
use tracing::info;

use crate::error::CatError;
use crate::input;
use crate::publisher::Publish;

/// Publish every record of `body` in order and return how many were sent.
pub async fn publish_lines<P: Publish>(publisher: &P, body: &[u8]) -> Result<usize, CatError> {
    let mut published = 0;

    for line in input::records(body) {
        input::validate(line).map_err(|source| CatError::JsonFormat {
            source,
            line: String::from_utf8_lossy(line).into_owned(),
        })?;

        let ids = publisher
            .publish(line.to_vec())
            .await
            .map_err(CatError::Publish)?;
        info!("published [{}]", ids.join(" "));
        published += 1;
    }

    Ok(published)
}
