use crate::{error::*, source::CaldavSource};

/// Seam towards the external account registry that persists and
/// activates calendar connections. Implementations map a
/// [`CaldavSource`] onto whatever registry API the environment
/// provides.
pub trait SourceRegistry {
    fn register(&mut self, source: &CaldavSource) -> Result<()>;
}
