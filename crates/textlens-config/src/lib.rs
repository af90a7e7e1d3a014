use serde::{Deserialize, Serialize};

use self::session::SessionConfig;
use self::vision::VisionConfig;

pub mod session;
pub mod vision;

#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vision: VisionConfig,
    pub session: SessionConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            vision: VisionConfig::new(),
            session: SessionConfig::new(),
        }
    }
}
