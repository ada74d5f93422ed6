//! Identicon derivation service.
//!
//! Validates the grid size, hashes the name through the injected
//! [`NameHasher`] and maps the digest to an [`Identicon`].

use glyphid_types::error::IdenticonError;
use glyphid_types::grid::GridSize;
use glyphid_types::identicon::Identicon;

use crate::derive::derive_from_digest;
use crate::service::hash::NameHasher;

/// Service deriving identicons from names.
///
/// Generic over the hasher to keep hashing crates out of core. Holds no
/// other state, so it can be shared freely across threads.
pub struct IdenticonService<H: NameHasher> {
    hasher: H,
}

impl<H: NameHasher> IdenticonService<H> {
    /// Create a new IdenticonService.
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Derive the identicon for `name` on a `grid_size` x `grid_size` grid.
    ///
    /// Returns [`IdenticonError::InvalidGridSize`] for zero or even sizes and
    /// [`IdenticonError::GridSizeTooLarge`] above [`GridSize::MAX`].
    pub fn derive(&self, name: &str, grid_size: usize) -> Result<Identicon, IdenticonError> {
        let size = GridSize::new(grid_size)?;
        Ok(self.derive_sized(name, size))
    }

    /// Derive with an already validated size.
    pub fn derive_sized(&self, name: &str, size: GridSize) -> Identicon {
        let digest = self.hasher.digest(name);
        let identicon = derive_from_digest(name, &digest, size);
        tracing::debug!(
            workspace = name,
            grid_size = size.get(),
            color = %identicon.color,
            cells_on = identicon.grid.count_on(),
            "derived identicon"
        );
        identicon
    }

    /// Derive identicons for every name, in order.
    pub fn derive_many<I, S>(
        &self,
        names: I,
        grid_size: usize,
    ) -> Result<Vec<Identicon>, IdenticonError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let size = GridSize::new(grid_size)?;
        Ok(names
            .into_iter()
            .map(|name| self.derive_sized(name.as_ref(), size))
            .collect())
    }
}
