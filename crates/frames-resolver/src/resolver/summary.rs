//! Resolution summary, one `info!` line per category in name order.

use tracing::info;

use frames_core::types::{ResolvedFrame, ResolvedFrameMap};

pub fn log_summary(frames: &ResolvedFrameMap) {
    for (category, frame) in frames {
        match frame {
            ResolvedFrame::Single(path) => info!("- {:<18} : {}", category.as_str(), path.display()),
            ResolvedFrame::Many(paths) if paths.len() == 1 => {
                info!("- {:<18} : {}", category.as_str(), paths[0].display())
            }
            ResolvedFrame::Many(paths) => {
                info!("- {:<18} :", category.as_str());
                for path in paths {
                    info!("  - {}", path.display());
                }
            }
        }
    }
}
