/// Asynchronous asset loader.
///
/// `load` fans each requested key out to its own worker thread; workers
/// report back over a channel.  `on_ready` drains the channel until nothing
/// is pending and then runs its callback exactly once.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use log::{debug, warn};

use crate::error::ResourceError;
use crate::sprites::{self, Sprite};

type LoadResult = (String, Result<Sprite, ResourceError>);

pub struct Resources {
    cache: HashMap<String, Sprite>,
    pending: usize,
    tx: Sender<LoadResult>,
    rx: Receiver<LoadResult>,
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

impl Resources {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            cache: HashMap::new(),
            pending: 0,
            tx,
            rx,
        }
    }

    /// Start loading every key in `keys`.  Keys that are already cached are
    /// skipped.  Loads proceed concurrently and in no particular order.
    pub fn load(&mut self, keys: &[&str]) {
        for &key in keys {
            if self.cache.contains_key(key) {
                continue;
            }
            let key = key.to_string();
            let tx = self.tx.clone();
            self.pending += 1;
            debug!("loading asset {}", key);
            thread::spawn(move || {
                let result = sprites::paint(&key).ok_or_else(|| ResourceError::UnknownAsset(key.clone()));
                // Receiver only goes away with the loader itself
                let _ = tx.send((key, result));
            });
        }
    }

    /// True once every requested load has reported back.
    pub fn is_ready(&self) -> bool {
        self.pending == 0
    }

    /// Block until every pending load has completed, then invoke `callback`
    /// once with the populated loader.  If any load failed the callback is
    /// never run and the first failure is returned.
    pub fn on_ready<T, F>(&mut self, callback: F) -> Result<T, ResourceError>
    where
        F: FnOnce(&Resources) -> T,
    {
        let mut first_err = None;
        while self.pending > 0 {
            let (key, result) = self
                .rx
                .recv()
                .map_err(|_| ResourceError::LoaderDisconnected)?;
            self.pending -= 1;
            match result {
                Ok(sprite) => {
                    debug!("asset ready: {}", key);
                    self.cache.insert(key, sprite);
                }
                Err(e) => {
                    warn!("asset load failed: {}", e);
                    first_err.get_or_insert(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(callback(self)),
        }
    }

    /// Fetch an already-loaded sprite.
    pub fn get(&self, key: &str) -> Result<&Sprite, ResourceError> {
        self.cache
            .get(key)
            .ok_or_else(|| ResourceError::NotLoaded(key.to_string()))
    }
}
