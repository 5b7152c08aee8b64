//! Texture lookup handed to whoever turns a [`Mesh`](crate::Mesh) into something drawable.
//!
//! Loading and binding textures is up to the renderer. This module only names the files.

use std::path::{Path, PathBuf};

/// Diffuse, normal and specular maps living side by side in one directory.
///
/// The directory is stored with each set so there is no process-wide texture root.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextureSet {
    pub directory: PathBuf,
    pub diffuse: String,
    pub normal: Option<String>,
    pub specular: Option<String>,
}

impl TextureSet {
    pub fn new(directory: impl Into<PathBuf>, diffuse: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            diffuse: diffuse.into(),
            normal: None,
            specular: None,
        }
    }

    pub fn with_normal(mut self, filename: impl Into<String>) -> Self {
        self.normal = Some(filename.into());
        self
    }

    pub fn with_specular(mut self, filename: impl Into<String>) -> Self {
        self.specular = Some(filename.into());
        self
    }

    pub fn diffuse_path(&self) -> PathBuf {
        self.directory.join(&self.diffuse)
    }

    pub fn normal_path(&self) -> Option<PathBuf> {
        self.normal.as_ref().map(|name| self.directory.join(name))
    }

    pub fn specular_path(&self) -> Option<PathBuf> {
        self.specular.as_ref().map(|name| self.directory.join(name))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Turns a [`TextureSet`] into whatever the renderer attaches to a mesh.
pub trait MaterialResolver {
    type Handle;

    fn resolve(&mut self, textures: &TextureSet) -> Self::Handle;
}
