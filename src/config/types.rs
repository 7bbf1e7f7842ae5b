use serde::{Deserialize, Serialize};

use crate::organize::CollisionPolicy;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub organize: OrganizeConfig,

    #[serde(default)]
    pub manga: MangaConfig,

    #[serde(default)]
    pub video: VideoConfig,
}

/// Settings shared by every organizing command.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrganizeConfig {
    /// Worker threads for fanning out over source directories.
    /// 0 means one per logical CPU.
    #[serde(default)]
    pub threads: usize,

    /// What to do when a destination path already exists.
    #[serde(default)]
    pub collision: CollisionPolicy,
}

impl Default for OrganizeConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            collision: CollisionPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MangaConfig {
    /// Replace underscores with spaces before parsing names.
    #[serde(default = "default_true")]
    pub replace_underscores: bool,

    /// Characters stripped from rendered folder names.
    #[serde(default = "default_forbidden")]
    pub forbidden_characters: String,
}

impl Default for MangaConfig {
    fn default() -> Self {
        Self {
            replace_underscores: true,
            forbidden_characters: default_forbidden(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VideoConfig {
    /// Extra extensions treated as video on top of the built-in list.
    #[serde(default)]
    pub extra_extensions: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_forbidden() -> String {
    "<>:\"/\\|?*".to_string()
}
