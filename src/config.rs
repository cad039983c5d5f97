use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::package::models::{PackageType, Region, TourType};

/// Extraction configuration for tourpack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory receiving the corpus and per-region files
    pub output_dir: PathBuf,
    /// Corpus file name inside `output_dir`
    pub corpus_file: String,
    /// Produce the Spanish fields
    pub translate: bool,
    /// File name tokens marking documents to skip (translated copies)
    pub skip_markers: Vec<String>,
    pub regions: Vec<RegionSource>,
}

/// Where a region's documents live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSource {
    pub region: Region,
    pub root: PathBuf,
    pub folders: Vec<FolderMapping>,
}

/// A subfolder and the package/tour type of every document in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderMapping {
    pub path: PathBuf,
    pub package_type: PackageType,
    pub tour_type: TourType,
}

impl FolderMapping {
    fn new(path: &str, package_type: PackageType, tour_type: TourType) -> Self {
        Self {
            path: PathBuf::from(path),
            package_type,
            tour_type,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: PathBuf::from("data"),
            corpus_file: "2026-packages.json".to_string(),
            translate: true,
            skip_markers: vec!["TR".to_string(), "TURKCE".to_string()],
            regions: vec![
                RegionSource {
                    region: Region::Turkey,
                    root: PathBuf::from("packages/turkey"),
                    folders: vec![
                        FolderMapping::new(
                            "2026 PACKAGE WITH SIC TOURS & PVT AIRPORT TRANSFERS - FT - done",
                            PackageType::WithHotel,
                            TourType::Sic,
                        ),
                        FolderMapping::new(
                            "2026 PACKAGES WITH PVT TOURS & PVT AIRPORT TRANSFERS - FT",
                            PackageType::WithHotel,
                            TourType::Private,
                        ),
                        FolderMapping::new(
                            "ONLY LAND SIC TOURS & PVT AIRPORT TRANSFERS - FT",
                            PackageType::LandOnly,
                            TourType::Sic,
                        ),
                        FolderMapping::new(
                            "ONLY LAND PVT TOURS & PVT AIRPORT TRANSFERS - FT",
                            PackageType::LandOnly,
                            TourType::Private,
                        ),
                    ],
                },
                RegionSource {
                    region: Region::Europe,
                    root: PathBuf::from("packages/europe"),
                    folders: vec![FolderMapping::new(
                        ".",
                        PackageType::WithHotel,
                        TourType::Private,
                    )],
                },
            ],
        }
    }
}

impl Config {
    /// Load configuration from `path`, else from the config directory, else
    /// the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::get_config_path().filter(|path| path.exists()),
        };

        match config_path {
            Some(config_path) => {
                let content = fs::read_to_string(&config_path)?;
                Ok(toml::from_str(&content)?)
            }
            None => Ok(Config::default()),
        }
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the default config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tourpack").join("config.toml"))
    }

    /// Write the default configuration, returning where it went
    pub fn init_default(path: Option<&Path>) -> Result<Option<PathBuf>> {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::get_config_path) else {
            return Ok(None);
        };
        Config::default().save(&path)?;
        Ok(Some(path))
    }

    pub fn source(&self, region: Region) -> Option<&RegionSource> {
        self.regions.iter().find(|source| source.region == region)
    }

    pub fn corpus_path(&self) -> PathBuf {
        self.output_dir.join(&self.corpus_file)
    }
}
