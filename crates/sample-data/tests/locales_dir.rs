//! Integration tests for generators backed by a locale directory.
//!
//! These tests write a small dataset tree, point the settings at it, and
//! check that pools come from disk, that gaps fall back to built-in values,
//! and that output stays reproducible for a fixed seed.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::{fixture, rstest};
use sample_data::color::{self, ColorOptions};
use sample_data::date::{self, DateOptions};
use sample_data::person::{self, Gender, PersonOptions};
use sample_data::{Generator, SampleDataSettings};

/// A locale tree removed when dropped.
struct LocaleTree {
    root: PathBuf,
}

impl LocaleTree {
    fn write(&self, relative: &str, contents: &str) {
        let path = self.root.join(relative);
        let parent = path.parent().expect("dataset path has a parent");
        fs::create_dir_all(parent).expect("create dataset directory");
        fs::write(&path, contents).expect("write dataset");
    }

    fn path(&self) -> &Path {
        &self.root
    }
}

impl Drop for LocaleTree {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.root) {
            drop(err);
        }
    }
}

#[fixture]
fn tree() -> LocaleTree {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    let root = PathBuf::from("target")
        .join("sample-data-tests")
        .join(format!("locales-{}-{counter}", std::process::id()));
    fs::create_dir_all(&root).expect("create locale root");

    let locales = LocaleTree { root };
    locales.write("en/color/names.json", r#"{"colors": ["vermilion"]}"#);
    locales.write("fr/color/names.json", r#"{"colors": ["vermillon"]}"#);
    locales.write(
        "en/person/first_names.json",
        r#"{"female": ["Grace"], "male": ["Alan"]}"#,
    );
    locales.write(
        "base/date/timezones.json",
        r#"{"timezones": ["Pacific/Auckland"]}"#,
    );
    locales.write("en/date/months.json", "not json");
    locales
}

fn settings_for(path: &Path, seed: u64) -> SampleDataSettings {
    SampleDataSettings {
        locales_dir: Some(path.to_path_buf()),
        seed: Some(seed),
        locale: None,
        samples: None,
    }
}

#[rstest]
fn pools_are_read_from_the_directory(tree: LocaleTree) {
    let generator = Generator::from_settings(&settings_for(tree.path(), 1));

    assert_eq!(
        color::name(&generator, &ColorOptions::default()),
        "vermilion"
    );
    assert_eq!(
        color::name(&generator, &ColorOptions::default().with_locale("fr")),
        "vermillon"
    );
}

#[rstest]
#[case(Gender::Female, "Grace")]
#[case(Gender::Male, "Alan")]
fn gender_filter_applies_to_directory_datasets(
    tree: LocaleTree,
    #[case] gender: Gender,
    #[case] expected: &str,
) {
    let generator = Generator::from_settings(&settings_for(tree.path(), 2));
    let options = PersonOptions::default().with_gender(gender);

    assert_eq!(person::first_name(&generator, &options), expected);
}

#[rstest]
fn gaps_in_the_tree_use_fallback_values(tree: LocaleTree) {
    let generator = Generator::from_settings(&settings_for(tree.path(), 3));
    let options = DateOptions::default();

    assert_eq!(date::month(&generator, &options), "January");
    assert_eq!(date::weekday(&generator, &options), "Monday");
    assert_eq!(
        person::last_name(&generator, &PersonOptions::default()),
        "Doe"
    );
}

#[rstest]
fn timezones_fall_through_to_the_base_locale(tree: LocaleTree) {
    let generator = Generator::from_settings(&settings_for(tree.path(), 4));

    assert_eq!(
        date::timezone(&generator, &DateOptions::default().with_locale("fr")),
        "Pacific/Auckland"
    );
}

#[rstest]
fn failed_loads_are_retried_while_good_ones_are_cached(tree: LocaleTree) {
    let generator = Generator::from_settings(&settings_for(tree.path(), 5));

    assert_eq!(date::month(&generator, &DateOptions::default()), "January");
    assert_eq!(color::name(&generator, &ColorOptions::default()), "vermilion");
    assert_eq!(generator.resolver().cached_datasets(), 1);

    tree.write("en/date/months.json", r#"{"months": ["Brumaire"]}"#);
    assert_eq!(date::month(&generator, &DateOptions::default()), "Brumaire");
    assert_eq!(generator.resolver().cached_datasets(), 2);
}

#[rstest]
fn a_fixed_seed_replays_across_generators(tree: LocaleTree) {
    let settings = settings_for(tree.path(), 6);
    let draw = |generator: &Generator| {
        (0..10)
            .map(|_| person::person(generator, &PersonOptions::default()))
            .collect::<Vec<_>>()
    };

    assert_eq!(
        draw(&Generator::from_settings(&settings)),
        draw(&Generator::from_settings(&settings))
    );
}
