use crate::consts::BEST_SCORE_KEY;
use crate::error::{CfResult, CircleForgeError};
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable home of the single best-score record.
pub trait BestScoreStore {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> CfResult<Option<f64>>;
    fn save(&mut self, score: f64) -> CfResult<()>;
}

/// Key-value JSON file, e.g. `{ "bestScore": 87.12 }`.
///
/// Other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    key: String,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_key(path, BEST_SCORE_KEY)
    }

    pub fn with_key<P: AsRef<Path>>(path: P, key: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            key: key.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> CfResult<Map<String, Value>> {
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            other => Err(CircleForgeError::Validation(format!(
                "Best score file '{}' is not a JSON object (found {})",
                self.path.display(),
                other
            ))),
        }
    }
}

impl BestScoreStore for JsonFileStore {
    fn load(&self) -> CfResult<Option<f64>> {
        if !self.path.exists() {
            debug!("No best score file at {}", self.path.display());
            return Ok(None);
        }
        let map = self.read_map()?;
        match map.get(&self.key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => Ok(n.as_f64()),
            // Older saves kept the display string ("42.17")
            Some(Value::String(s)) => s.trim().parse::<f64>().map(Some).map_err(|_| {
                CircleForgeError::Validation(format!(
                    "Stored value for '{}' is not a number: {:?}",
                    self.key, s
                ))
            }),
            Some(other) => Err(CircleForgeError::Validation(format!(
                "Stored value for '{}' is not a number: {}",
                self.key, other
            ))),
        }
    }

    fn save(&mut self, score: f64) -> CfResult<()> {
        let number = Number::from_f64(score).ok_or_else(|| {
            CircleForgeError::Validation(format!("Cannot persist non-finite score {}", score))
        })?;

        // A corrupt file is replaced rather than blocking the save
        let mut map = if self.path.exists() {
            self.read_map().unwrap_or_default()
        } else {
            Map::new()
        };
        map.insert(self.key.clone(), Value::Number(number));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&Value::Object(map))?)?;
        debug!("Persisted best score {} to {}", score, self.path.display());
        Ok(())
    }
}

/// Process-local store, used by tests and embedders without durable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<f64>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn with_value(value: f64) -> Self {
        Self {
            value: Some(value),
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> CfResult<Option<f64>> {
        Ok(self.value)
    }

    fn save(&mut self, score: f64) -> CfResult<()> {
        self.value = Some(score);
        self.writes += 1;
        Ok(())
    }
}
