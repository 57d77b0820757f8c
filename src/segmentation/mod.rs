pub mod threshold;
pub mod cleanup;
pub mod labeling;
pub mod regions;
pub mod overlay;

pub use cleanup::{fill_small_holes, foreground_pixels, remove_small_objects};
pub use labeling::{label_regions, max_label};
pub use overlay::{render_overlay, OVERLAY_ALPHA};
pub use regions::region_stats;
pub use threshold::{binarize, otsu_threshold};
