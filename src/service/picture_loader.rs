use crate::config::PictureSeed;
use crate::db::{NewPicture, PicturesStorage};
use crate::error::GateError;
use std::fs;
use tracing::{info, warn};

/// Read every seed's file from disk. Unreadable seeds are logged and skipped.
pub fn load_seeds(seeds: &[PictureSeed]) -> Vec<NewPicture> {
    seeds
        .iter()
        .filter_map(|seed| {
            load_seed(seed)
                .inspect_err(|e| {
                    warn!(
                        name = %seed.name,
                        path = %seed.path.display(),
                        error = %e,
                        "failed to load picture"
                    );
                })
                .ok()
        })
        .collect()
}

/// Load all seeds and write them to the picture store. Rows the store rejects
/// are logged and skipped. Returns how many were stored.
pub async fn seed_store(storage: &PicturesStorage, seeds: &[PictureSeed]) -> usize {
    if seeds.is_empty() {
        info!("no picture seeds configured");
        return 0;
    }

    let mut stored = 0;
    for pic in load_seeds(seeds) {
        let (id, name) = (pic.id, pic.name.clone());
        info!(id, name = %name, owner = ?pic.owner, "seeding picture");
        match storage.upsert(pic).await {
            Ok(()) => stored += 1,
            Err(e) => warn!(id, name = %name, error = %e, "failed to store picture"),
        }
    }
    stored
}

fn load_seed(seed: &PictureSeed) -> Result<NewPicture, GateError> {
    let data = fs::read(&seed.path)?;
    Ok(NewPicture {
        id: seed.id,
        name: seed.name.clone(),
        data: Some(data),
        owner: seed.owner.clone(),
    })
}
