#![cfg(feature = "std")]

//! Binary save files holding a complete [`GameState`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::Context;

use crate::core::GameState;

/// Encode `state` into `writer`.
pub fn save_state<W: Write>(state: &GameState, writer: W) -> anyhow::Result<()> {
    bincode::serialize_into(writer, state)?;
    Ok(())
}

/// Decode a state previously written by [`save_state`].
pub fn load_state<R: Read>(reader: R) -> anyhow::Result<GameState> {
    Ok(bincode::deserialize_from(reader)?)
}

pub fn save_to_file(state: &GameState, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    save_state(state, &mut writer)?;
    writer.flush()?;
    log::info!("saved game to {}", path.display());
    Ok(())
}

pub fn load_from_file(path: &Path) -> anyhow::Result<GameState> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    load_state(BufReader::new(file)).with_context(|| format!("decoding {}", path.display()))
}
