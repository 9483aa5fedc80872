//! Catalog store - read-only album catalog loaded from a JSON file

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::Discography;
use crate::core::ids::{self, MAX_ID_NUMBER};
use crate::core::pagination::paginate;
use crate::error::CatalogError;
use crate::models::{Album, Page, Track};

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
struct CatalogFile {
    albums: Vec<AlbumEntry>,
}

#[derive(Debug, Deserialize)]
struct AlbumEntry {
    title: String,
    artist: String,
    #[serde(default)]
    songs: Vec<SongEntry>,
}

#[derive(Debug, Deserialize)]
struct SongEntry {
    title: String,
    duration: String,
}

/// Catalog that reads albums from a JSON document.
///
/// Ids are assigned from position: the third album is `"03"` and its second
/// song is `"03-02"`.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    url: String,
    /// Albums in ascending id order
    albums: Vec<Album>,
    /// Album id to position in `albums`
    index: HashMap<String, usize>,
}

impl JsonCatalog {
    /// Load the catalog behind a `file://` url
    pub fn open(url: &str) -> Result<Self> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        let content = std::fs::read_to_string(Path::new(path))
            .with_context(|| format!("Failed to read catalog file {}", path))?;
        let catalog = Self::from_json(url, &content)
            .with_context(|| format!("Failed to load catalog {}", url))?;
        Ok(catalog)
    }

    /// Build the catalog from JSON text
    pub fn from_json(url: &str, content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(content).map_err(|e| CatalogError::Load(e.to_string()))?;

        if file.albums.len() > MAX_ID_NUMBER {
            return Err(CatalogError::Load(format!(
                "{} albums exceed the {} addressable by two-digit ids",
                file.albums.len(),
                MAX_ID_NUMBER
            )));
        }

        let mut albums = Vec::with_capacity(file.albums.len());
        let mut index = HashMap::new();

        for (position, entry) in file.albums.into_iter().enumerate() {
            let album_id = ids::album_id(position);

            if entry.songs.len() > MAX_ID_NUMBER {
                return Err(CatalogError::Load(format!(
                    "album {} has {} tracks, at most {} are addressable",
                    album_id,
                    entry.songs.len(),
                    MAX_ID_NUMBER
                )));
            }

            let tracks = entry
                .songs
                .into_iter()
                .enumerate()
                .map(|(number, song)| {
                    Track::new(
                        ids::track_id(&album_id, number),
                        song.title,
                        song.duration,
                        format!("file://{}/{:02}.mp4", album_id, number + 1),
                    )
                })
                .collect();

            index.insert(album_id.clone(), position);
            albums.push(Album {
                id: album_id,
                artist: entry.artist,
                title: entry.title,
                tracks,
            });
        }

        tracing::debug!(url, albums = albums.len(), "catalog loaded");

        Ok(Self {
            url: url.to_string(),
            albums,
            index,
        })
    }

    /// Where the catalog was loaded from
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Total album count
    pub fn count(&self) -> usize {
        self.albums.len()
    }

    fn album(&self, album_id: &str) -> Option<&Album> {
        self.index.get(album_id).and_then(|&i| self.albums.get(i))
    }
}

impl Discography for JsonCatalog {
    fn list_albums(&self, page: Option<&Page>) -> Result<Vec<Album>, CatalogError> {
        paginate(&self.albums, page)
    }

    fn list_tracks(
        &self,
        album_id: &str,
        page: Option<&Page>,
    ) -> Result<Vec<Track>, CatalogError> {
        ids::validate_album_id(album_id)?;
        let album = self
            .album(album_id)
            .ok_or_else(|| CatalogError::NotFound(format!("{} album", album_id)))?;
        paginate(&album.tracks, page)
    }

    fn get_track(&self, track_id: &str) -> Result<Track, CatalogError> {
        let parsed = ids::parse_track_id(track_id)?;
        let album = self
            .album(parsed.album_id)
            .ok_or_else(|| CatalogError::NotFound(format!("{} album", track_id)))?;
        album
            .track_at(parsed.number)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("{} track", track_id)))
    }
}

/// Sample catalog shared by tests across the crate
#[cfg(test)]
pub(crate) const SAMPLE_CATALOG: &str = r#"{
"albums": [
  {
    "title": "The Joshua Tree",
    "artist": "U2",
    "songs": [
      {"title": "Where The Streets Have No Name", "duration": "5:37"},
      {"title": "I Still Haven't Found What I'm Looking For", "duration": "4:37"},
      {"title": "With Or Without You", "duration": "4:56"},
      {"title": "Bullet The Blue Sky", "duration": "4:32"},
      {"title": "Running To Stand Still", "duration": "4:17"},
      {"title": "Red Hill Mining Town", "duration": "4:53"}
    ]
  },
  {
    "title": "Lateralus",
    "artist": "Tool",
    "songs": [
      {"title": "The grudge", "duration": "8:36"},
      {"title": "Eon Blue Apocalypse", "duration": "1:07"},
      {"title": "The patient", "duration": "7:13"}
    ]
  },
  {
    "title": "Animals",
    "artist": "Pink Floyd",
    "songs": [
      {"title": "Pigs on the Wing, Part 1", "duration": "1.25"},
      {"title": "Dogs", "duration": "17:05"}
    ]
  }
]
}"#;

#[cfg(test)]
pub(crate) fn sample_catalog() -> JsonCatalog {
    JsonCatalog::from_json("memory://sample", SAMPLE_CATALOG).unwrap()
}
