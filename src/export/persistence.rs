use std::hash::Hash;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::values::ValueTable;

/// Save a value table with bincode
pub fn save_values<S>(values: &ValueTable<S>, path: &Path) -> Result<()>
where
    S: Serialize + Eq + Hash + Clone,
{
    let serialized = bincode::serialize(values)?;
    std::fs::write(path, serialized)?;
    Ok(())
}

/// Load a value table written by [`save_values`]
pub fn load_values<S>(path: &Path) -> Result<ValueTable<S>>
where
    S: DeserializeOwned + Eq + Hash + Clone,
{
    let data = std::fs::read(path)?;
    Ok(bincode::deserialize(&data)?)
}
