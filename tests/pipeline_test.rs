mod common;

use std::path::PathBuf;
use tourpack::config::{Config, FolderMapping, RegionSource};
use tourpack::corpus::{load_corpus, save_corpus};
use tourpack::pipeline::{self, extract_region};
use tourpack::{Error, PackageRecord, PackageType, Region, TourType};

use common::{build, paragraph, sample_package, write_docx};

fn europe_package(title: &str) -> Vec<u8> {
    build(
        docx_rs::Docx::new()
            .add_paragraph(paragraph(title))
            .add_paragraph(paragraph("3 Nights / 4 Days"))
            .add_paragraph(paragraph("Day 1 - Arrival in Budapest (-)"))
            .add_paragraph(paragraph("Transfer to the hotel.")),
    )
}

fn config_for(root: PathBuf, output_dir: PathBuf) -> Config {
    Config {
        output_dir,
        translate: false,
        regions: vec![
            RegionSource {
                region: Region::Turkey,
                root: root.join("turkey"),
                folders: vec![
                    FolderMapping {
                        path: PathBuf::from("sic"),
                        package_type: PackageType::WithHotel,
                        tour_type: TourType::Sic,
                    },
                    FolderMapping {
                        path: PathBuf::from("land-pvt"),
                        package_type: PackageType::LandOnly,
                        tour_type: TourType::Private,
                    },
                    FolderMapping {
                        path: PathBuf::from("missing"),
                        package_type: PackageType::LandOnly,
                        tour_type: TourType::Sic,
                    },
                ],
            },
            RegionSource {
                region: Region::Europe,
                root: root.join("europe"),
                folders: vec![FolderMapping {
                    path: PathBuf::from("."),
                    package_type: PackageType::WithHotel,
                    tour_type: TourType::Private,
                }],
            },
        ],
        ..Config::default()
    }
}

#[cfg(test)]
mod pipeline_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_extract_region_collects_failures() {
        let dir = tempfile::tempdir().unwrap();
        let turkey = dir.path().join("turkey");
        write_docx(&turkey.join("sic").join("02 Sample.docx"), &sample_package());
        write_docx(&turkey.join("sic").join("~$02 Sample.docx"), b"lock");
        write_docx(&turkey.join("sic").join("01 Broken.docx"), b"not a zip");
        write_docx(&turkey.join("land-pvt").join("04 Sample.docx"), &sample_package());
        write_docx(&turkey.join("land-pvt").join("04 Sample TR.docx"), &sample_package());

        let config = config_for(dir.path().to_path_buf(), dir.path().join("out"));
        let extraction = extract_region(
            config.source(Region::Turkey).unwrap(),
            &config.skip_markers,
            config.translate,
        )
        .await
        .unwrap();

        let ids: Vec<&str> = extraction
            .records
            .iter()
            .map(|r| r.package_id.as_str())
            .collect();
        assert_eq!(ids, vec!["SIC-02", "LAND-PVT-04"]);
        assert_eq!(extraction.records[1].title, "Turkey 7 Nights Private Tour - Land Only");

        assert_eq!(extraction.failures.len(), 1);
        assert_eq!(
            extraction.failures[0].source,
            turkey.join("sic").join("01 Broken.docx")
        );
        assert!(!extraction.failures[0].reason.is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_package_ids_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let sic = dir.path().join("turkey").join("sic");
        for name in [
            "01 Istanbul.docx",
            "01 Cappadocia.docx",
            "Extra.docx",
            "Another.docx",
        ] {
            write_docx(&sic.join(name), &sample_package());
        }

        let config = config_for(dir.path().to_path_buf(), dir.path().join("out"));
        let extraction = extract_region(
            config.source(Region::Turkey).unwrap(),
            &config.skip_markers,
            config.translate,
        )
        .await
        .unwrap();

        let ids: Vec<&str> = extraction
            .records
            .iter()
            .map(|r| r.package_id.as_str())
            .collect();
        assert_eq!(ids, vec!["SIC-01", "SIC-00"]);

        let failed: Vec<PathBuf> = extraction
            .failures
            .iter()
            .map(|f| f.source.clone())
            .collect();
        assert_eq!(
            failed,
            vec![sic.join("01 Istanbul.docx"), sic.join("Extra.docx")]
        );
        assert!(extraction.failures[0]
            .reason
            .starts_with("duplicate package id SIC-01"));
        assert!(extraction.failures[0].reason.contains("01 Cappadocia.docx"));
    }

    #[tokio::test]
    async fn test_missing_region_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path().join("nowhere"), dir.path().join("out"));

        let result = extract_region(
            config.source(Region::Europe).unwrap(),
            &config.skip_markers,
            false,
        )
        .await;
        assert!(matches!(result, Err(Error::MissingSource(_))));
    }

    #[tokio::test]
    async fn test_run_replaces_region_in_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let europe = dir.path().join("europe");
        write_docx(&europe.join("01 Budapest.docx"), &europe_package("Budapest - Vienna"));
        write_docx(&europe.join("02 Prague.docx"), &europe_package("Prague Highlights"));

        let output_dir = dir.path().join("out");
        let config = config_for(dir.path().to_path_buf(), output_dir.clone());

        // A previous run left a Turkey record and a stale Europe record
        let stale = vec![
            PackageRecord {
                package_id: "SIC-01".to_string(),
                title: "Istanbul 3 Nights Group Tour".to_string(),
                ..PackageRecord::default()
            },
            PackageRecord {
                package_id: "EUR-PVT-09".to_string(),
                ..PackageRecord::default()
            },
        ];
        save_corpus(&config.corpus_path(), &stale).unwrap();

        let first = pipeline::run(&config, Region::Europe).await.unwrap();
        assert_eq!(first.merge.replaced, 1);
        assert_eq!(first.merge.added, 2);
        assert!(first.failures.is_empty());
        let after_first = load_corpus(&config.corpus_path()).unwrap();

        let second = pipeline::run(&config, Region::Europe).await.unwrap();
        assert_eq!(second.merge.replaced, 2);
        let after_second = load_corpus(&config.corpus_path()).unwrap();

        assert_eq!(after_first, after_second);
        let ids: Vec<&str> = after_second.iter().map(|r| r.package_id.as_str()).collect();
        assert_eq!(ids, vec!["SIC-01", "EUR-PVT-01", "EUR-PVT-02"]);
        assert_eq!(after_second[0].region, Some(Region::Turkey));
        assert_eq!(after_second[1].title, "Budapest & Vienna 3 Nights Private Tour");

        let europe_only = load_corpus(&output_dir.join("europe-packages.json")).unwrap();
        assert_eq!(europe_only.len(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_region() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            regions: Vec::new(),
            output_dir: dir.path().to_path_buf(),
            ..Config::default()
        };

        assert!(matches!(
            pipeline::run(&config, Region::Turkey).await,
            Err(Error::RegionNotConfigured(Region::Turkey))
        ));
    }
}
