//! Per-mode install instructions.
//!
//! Every archive carries a plain-text guide under [`GUIDE_FILE_NAME`]. The
//! bundled guides can be replaced from a directory of `<mode>.txt` files.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use crate::mode::Mode;

/// Archive entry name of the install guide.
pub const GUIDE_FILE_NAME: &str = "HowToInstall.txt";

const EMBEDDED_GUIDES: &[(Mode, &str)] = &[
    (Mode::Iterm, include_str!("../assets/install/iterm.txt")),
    (Mode::Warp, include_str!("../assets/install/warp.txt")),
    (Mode::Hyper, include_str!("../assets/install/hyper.txt")),
    (Mode::Kitty, include_str!("../assets/install/kitty.txt")),
    (Mode::Alacritty, include_str!("../assets/install/alacritty.txt")),
];

/// Install guide text keyed by mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallGuides {
    guides: BTreeMap<Mode, String>,
}

impl InstallGuides {
    /// No guides at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// The guides compiled into the crate, one per mode.
    pub fn embedded() -> Self {
        let guides = EMBEDDED_GUIDES
            .iter()
            .map(|(mode, text)| (*mode, (*text).to_string()))
            .collect();
        Self { guides }
    }

    pub fn insert(&mut self, mode: Mode, text: impl Into<String>) {
        self.guides.insert(mode, text.into());
    }

    /// Loads `<mode>.txt` files from `dir`, replacing existing guides.
    ///
    /// Files whose stem is not a mode identifier are skipped. Returns the
    /// number of guides loaded.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> io::Result<usize> {
        let dir = dir.as_ref();
        let mut loaded = 0;

        for mode in Mode::ALL {
            let path = dir.join(format!("{}.txt", mode.as_str()));
            if !path.is_file() {
                continue;
            }
            let text = std::fs::read_to_string(&path)?;
            tracing::debug!(mode = %mode, path = %path.display(), "loaded install guide");
            self.guides.insert(mode, text);
            loaded += 1;
        }

        Ok(loaded)
    }

    pub fn get(&self, mode: Mode) -> Option<&str> {
        self.guides.get(&mode).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}
