use crate::domain::ports::MediaPlayer;
use crate::utils::error::{KitError, Result};
use std::path::Path;

/// Honors the full `MediaPlayer` contract: any path plays.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnyPlayer;

impl MediaPlayer for AnyPlayer {
    fn play(&self, path: &str) -> Result<()> {
        tracing::info!("playing {}", path);
        Ok(())
    }
}

/// Narrows the contract: refuses anything that is not `.avi`, so callers
/// written against `MediaPlayer` break when this is substituted in. Kept
/// as the documented counter-example; do not copy this pattern.
#[derive(Debug, Default, Clone, Copy)]
pub struct AviPlayer;

impl MediaPlayer for AviPlayer {
    fn play(&self, path: &str) -> Result<()> {
        match Path::new(path).extension().and_then(|ext| ext.to_str()) {
            Some("avi") => {
                tracing::info!("playing {}", path);
                Ok(())
            }
            _ => Err(KitError::UnsupportedFormatError {
                path: path.to_string(),
            }),
        }
    }
}

/// A straight-through consumer of the `MediaPlayer` capability. It has no
/// idea which player it was handed, which is exactly what the narrowed
/// `AviPlayer` breaks.
pub struct Playlist<P: MediaPlayer> {
    player: P,
}

impl<P: MediaPlayer> Playlist<P> {
    pub fn new(player: P) -> Self {
        Self { player }
    }

    /// Plays every track, returning how many completed. Stops at the
    /// first track the player refuses.
    pub fn play_all(&self, tracks: &[&str]) -> Result<usize> {
        let mut played = 0;
        for track in tracks {
            self.player.play(track)?;
            played += 1;
        }
        Ok(played)
    }
}
