//! Step 1: the categories one resolution call has to produce.

use std::collections::BTreeSet;

use tracing::debug;

use frames_core::config::{FrameSetting, RunFramesConfig};
use frames_core::traits::FrameRequirement;
use frames_core::types::FrameCategory;

/// Required categories minus the default exclusions, then every run-level
/// `exclude`/`include` entry in document order.
pub fn build_working_set(
    requirement: &dyn FrameRequirement,
    frames: &RunFramesConfig,
) -> BTreeSet<FrameCategory> {
    let mut set: BTreeSet<FrameCategory> = requirement.required_categories().into_iter().collect();
    debug!(frames = ?set, "Required frames");

    let excluded = requirement.default_excluded_categories();
    for category in &excluded {
        set.remove(category);
    }
    debug!(excluded = ?excluded, "Excluded by default");

    for (_, setting) in frames.entries() {
        match setting {
            FrameSetting::Exclude(names) => {
                debug!(exclude = ?names, "Run exclude");
                for name in names {
                    set.remove(name.as_str());
                }
            }
            FrameSetting::Include(names) => {
                debug!(include = ?names, "Run include");
                set.extend(names.iter().map(|n| FrameCategory::from(n.as_str())));
            }
            FrameSetting::Offsets(_) | FrameSetting::Override(_) => {}
        }
    }
    set
}
