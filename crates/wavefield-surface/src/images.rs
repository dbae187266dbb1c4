//! Breadth-first expansion of image sources.
//!
//! Images are stored in an arena in generation order. Generation `g + 1` is
//! produced by reflecting every image of generation `g` (the first
//! generation reflects the real source), so the arena holds each
//! generation as one contiguous range.

use crate::geometry::{HalfExtent, Position};
use crate::region::{reflect_position, Edge};
use wavefield_core::InvariantViolation;

/// Index of an image in its [`ImageArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageIndex(pub usize);

/// One mirrored copy of a real source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSource {
    /// Mirrored position.
    pub position: Position,
    /// Reflection generation, starting at 1.
    pub generation: u32,
    /// The image this one was mirrored from; `None` for the real source.
    pub parent: Option<ImageIndex>,
    /// Edge mirrored across to produce this image.
    pub edge: Edge,
}

/// All images of one real source up to a reflection depth.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageArena {
    images: Vec<ImageSource>,
}

impl ImageArena {
    /// Expand `depth` generations of images of `origin` against the
    /// rectangle `half`.
    ///
    /// ```
    /// use wavefield_surface::{HalfExtent, ImageArena, Position};
    ///
    /// let half = HalfExtent::new(1.0, 1.0).unwrap();
    /// let arena = ImageArena::expand(Position::new(0.0, 0.0), half, 2).unwrap();
    /// assert_eq!(arena.len(), 4 + 4 * 3);
    /// ```
    pub fn expand(
        origin: Position,
        half: HalfExtent,
        depth: u32,
    ) -> Result<Self, InvariantViolation> {
        let mut arena = Self::default();
        if depth == 0 {
            return Ok(arena);
        }
        arena.reflect(None, origin, 1, half)?;

        let mut frontier = 0..arena.images.len();
        for generation in 2..=depth {
            let end = arena.images.len();
            for i in frontier {
                let parent = arena.images[i].position;
                arena.reflect(Some(ImageIndex(i)), parent, generation, half)?;
            }
            frontier = end..arena.images.len();
        }
        log::trace!(
            "expanded {} images of {} over {} generations",
            arena.images.len(),
            origin,
            depth
        );
        Ok(arena)
    }

    fn reflect(
        &mut self,
        parent: Option<ImageIndex>,
        position: Position,
        generation: u32,
        half: HalfExtent,
    ) -> Result<(), InvariantViolation> {
        for (edge, image) in reflect_position(position, half)? {
            self.images.push(ImageSource {
                position: image,
                generation,
                parent,
                edge,
            });
        }
        Ok(())
    }

    /// Number of images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether there are no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Image at `index`.
    pub fn get(&self, index: ImageIndex) -> Option<&ImageSource> {
        self.images.get(index.0)
    }

    /// All images in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &ImageSource> {
        self.images.iter()
    }

    /// Images of one generation.
    pub fn generation(&self, generation: u32) -> impl Iterator<Item = &ImageSource> {
        self.images
            .iter()
            .filter(move |image| image.generation == generation)
    }

    /// Edges crossed from the real source to `index`, first reflection
    /// first.
    pub fn lineage(&self, index: ImageIndex) -> Vec<Edge> {
        let mut edges = Vec::new();
        let mut cursor = self.get(index);
        while let Some(image) = cursor {
            edges.push(image.edge);
            cursor = image.parent.and_then(|p| self.get(p));
        }
        edges.reverse();
        edges
    }
}
