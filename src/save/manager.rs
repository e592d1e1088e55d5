//! File-backed persistence with an integrity envelope.
//!
//! Layout: `magic (u64 LE) | length (u32 LE) | JSON payload | SHA-256`, the
//! checksum covering magic, length and payload.

use directories::ProjectDirs;
use rand::Rng;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::constants::{SAVE_FILE_NAME, SAVE_VERSION_MAGIC};
use crate::core::game_state::GameState;
use crate::error::{Result, SaveError};

pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses `<config dir>/math-miner/save.dat`, creating the directory.
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("", "", "math-miner").ok_or(SaveError::NoConfigDir)?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join(SAVE_FILE_NAME),
        })
    }

    /// Uses an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Writes `state`, stamping its save time.
    pub fn save(&self, state: &mut GameState) -> Result<()> {
        state.last_save_time = chrono::Utc::now().timestamp();
        let data = serde_json::to_vec(state)?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        if let Some(parent) = self.save_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = fs::File::create(&self.save_path)?;
        file.write_all(&SAVE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        debug!(path = %self.save_path.display(), bytes = data.len(), "game saved");
        Ok(())
    }

    /// Reads and verifies the envelope, then decodes fields leniently.
    pub fn load<R: Rng>(&self, rng: &mut R) -> Result<GameState> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut magic_bytes = [0u8; 8];
        read_exact(&mut file, &mut magic_bytes)?;
        let magic = u64::from_le_bytes(magic_bytes);
        if magic != SAVE_VERSION_MAGIC {
            return Err(SaveError::InvalidMagic {
                expected: SAVE_VERSION_MAGIC,
                found: magic,
            });
        }

        let mut length_bytes = [0u8; 4];
        read_exact(&mut file, &mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        let mut data = vec![0u8; data_len as usize];
        read_exact(&mut file, &mut data)?;

        let mut stored_checksum = [0u8; 32];
        read_exact(&mut file, &mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        if stored_checksum != hasher.finalize().as_slice() {
            return Err(SaveError::ChecksumMismatch);
        }

        let root: serde_json::Value = serde_json::from_slice(&data)?;
        Ok(GameState::from_save_value(&root, rng))
    }

    /// Loads the save, or starts fresh if there is none or it is unreadable.
    pub fn load_or_new<R: Rng>(&self, rng: &mut R) -> GameState {
        if !self.save_exists() {
            return GameState::new(rng);
        }
        match self.load(rng) {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, path = %self.save_path.display(), "could not load save, starting fresh");
                GameState::new(rng)
            }
        }
    }

    /// Removes the save file. A missing file is not an error.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.save_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn read_exact(file: &mut fs::File, buf: &mut [u8]) -> Result<()> {
    file.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => SaveError::Truncated,
        _ => SaveError::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn temp_manager() -> SaveManager {
        use std::sync::atomic::{AtomicU64, Ordering};
        static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

        let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "math-miner-test-{}-{}",
            std::process::id(),
            test_id
        ));
        SaveManager::at(dir.join(SAVE_FILE_NAME))
    }

    #[test]
    fn test_save_and_load() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let manager = temp_manager();
        let mut state = GameState::new(&mut rng);
        state.resources.add(ResourceKind::Silver, 33);
        state.current_mob_index = 4;

        manager.save(&mut state).unwrap();
        assert!(state.last_save_time > 0);
        let loaded = manager.load(&mut rng).unwrap();
        assert_eq!(loaded, state);
        manager.delete().unwrap();
    }

    #[test]
    fn test_checksum_detects_tampering() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let manager = temp_manager();
        let mut state = GameState::new(&mut rng);
        manager.save(&mut state).unwrap();

        let mut bytes = fs::read(manager.path()).unwrap();
        bytes[20] ^= 0xFF;
        fs::write(manager.path(), &bytes).unwrap();

        assert!(matches!(
            manager.load(&mut rng),
            Err(SaveError::ChecksumMismatch)
        ));
        manager.delete().unwrap();
    }

    #[test]
    fn test_bad_magic() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let manager = temp_manager();
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), [0u8; 64]).unwrap();
        assert!(matches!(
            manager.load(&mut rng),
            Err(SaveError::InvalidMagic { found: 0, .. })
        ));
        manager.delete().unwrap();
    }

    #[test]
    fn test_truncated_file() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let manager = temp_manager();
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), SAVE_VERSION_MAGIC.to_le_bytes()).unwrap();
        assert!(matches!(manager.load(&mut rng), Err(SaveError::Truncated)));
        manager.delete().unwrap();
    }

    #[test]
    fn test_load_or_new_recovers() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let manager = temp_manager();
        let fresh = manager.load_or_new(&mut rng);
        assert_eq!(fresh.current_mob_index, 0);

        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), b"garbage").unwrap();
        let recovered = manager.load_or_new(&mut rng);
        assert!(recovered.resources.is_empty());
        manager.delete().unwrap();
    }

    #[test]
    fn test_delete_missing_is_ok() {
        let manager = temp_manager();
        assert!(manager.delete().is_ok());
    }
}
