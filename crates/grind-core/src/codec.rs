//! where: grind compression step; what: snappy and zstd behind one enum; why: score candidates by compressed size

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ZSTD_LEVEL: i32 = 3;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Codec {
    /// Raw snappy block format (no framing).
    #[default]
    Snappy,
    Zstd { level: i32 },
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("snappy: {0}")]
    Snappy(#[from] snap::Error),
    #[error("zstd: {0}")]
    Zstd(#[from] std::io::Error),
    #[error("unknown codec: {0}")]
    Unknown(String),
}

impl Codec {
    pub fn compress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Snappy => Ok(snap::raw::Encoder::new().compress_vec(data)?),
            Codec::Zstd { level } => Ok(zstd::bulk::compress(data, *level)?),
        }
    }

    pub fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, CodecError> {
        match self {
            Codec::Snappy => Ok(snap::raw::Decoder::new().decompress_vec(data)?),
            Codec::Zstd { .. } => Ok(zstd::stream::decode_all(data)?),
        }
    }
}

impl FromStr for Codec {
    type Err = CodecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let lowered = trimmed.to_ascii_lowercase();
        match lowered.as_str() {
            "snappy" => return Ok(Codec::Snappy),
            "zstd" => {
                return Ok(Codec::Zstd {
                    level: DEFAULT_ZSTD_LEVEL,
                })
            }
            _ => {}
        }
        if let Some(level) = lowered.strip_prefix("zstd:") {
            let level = level
                .parse::<i32>()
                .map_err(|_| CodecError::Unknown(trimmed.to_string()))?;
            return Ok(Codec::Zstd { level });
        }
        Err(CodecError::Unknown(trimmed.to_string()))
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Codec::Snappy => write!(f, "snappy"),
            Codec::Zstd { level } => write!(f, "zstd:{level}"),
        }
    }
}
