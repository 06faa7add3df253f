use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use jvm_translator::{
    jvm::{
        class_loader::{
            ClassPathChain, ClassResolver, DirectoryClassPath, JarClassPath, KnownClasses,
            NopClassPath,
        },
        references::ClassRef,
    },
    translator::{Error, Translator},
};
use rayon::prelude::*;
use tempfile::TempDir;
use zip::{ZipWriter, write::SimpleFileOptions};

const CLASSES: [&str; 3] = [
    "org/pkg/MyClass",
    "org/pkg/MyClass$Inner",
    "org/other/Helper",
];

fn create_test_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for class in CLASSES {
        let path = dir.path().join(format!("{class}.class"));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, [0xCA, 0xFE, 0xBA, 0xBE]).unwrap();
    }
    fs::write(dir.path().join("org/pkg/README.txt"), "not a class").unwrap();
    dir
}

fn create_test_jar(dir: &Path) -> std::path::PathBuf {
    let jar_path = dir.join("test.jar");
    let mut jar = ZipWriter::new(File::create(&jar_path).unwrap());
    for class in CLASSES {
        jar.start_file(format!("{class}.class"), SimpleFileOptions::default())
            .unwrap();
        jar.write_all(&[0xCA, 0xFE, 0xBA, 0xBE]).unwrap();
    }
    jar.finish().unwrap();
    jar_path
}

#[test]
fn directory_class_path() {
    let dir = create_test_dir();
    let cp = DirectoryClassPath::new(dir.path());
    assert_eq!(
        cp.resolve_class("org.pkg.MyClass"),
        Some(ClassRef::new("org/pkg/MyClass"))
    );
    assert_eq!(
        cp.resolve_class("org.pkg.MyClass$Inner"),
        Some(ClassRef::new("org/pkg/MyClass$Inner"))
    );
    assert_eq!(cp.resolve_class("org.pkg.MyAbsentClass"), None);
    assert_eq!(cp.resolve_class("org.pkg"), None);
    assert_eq!(cp.resolve_class("org/pkg/MyClass"), None);
    assert_eq!(cp.resolve_class("org.pkg.README"), None);
}

#[test]
fn jar_class_path() {
    let dir = TempDir::new().unwrap();
    let cp = JarClassPath::new(create_test_jar(dir.path()));
    assert_eq!(
        cp.resolve_class("org.other.Helper"),
        Some(ClassRef::new("org/other/Helper"))
    );
    assert_eq!(cp.resolve_class("org.other.Absent"), None);
    assert_eq!(cp.resolve_class("Helper"), None);
}

#[test]
fn jar_read_once() {
    let dir = TempDir::new().unwrap();
    let jar_path = create_test_jar(dir.path());
    let cp = JarClassPath::new(&jar_path);
    assert_eq!(
        cp.resolve_class("org.pkg.MyClass"),
        Some(ClassRef::new("org/pkg/MyClass"))
    );
    fs::remove_file(&jar_path).unwrap();
    assert_eq!(
        cp.resolve_class("org.pkg.MyClass$Inner"),
        Some(ClassRef::new("org/pkg/MyClass$Inner"))
    );
    assert_eq!(cp.resolve_class("org.pkg.Absent"), None);
}

#[test]
fn missing_jar_resolves_nothing() {
    let dir = TempDir::new().unwrap();
    let cp = JarClassPath::new(dir.path().join("absent.jar"));
    assert_eq!(cp.resolve_class("org.other.Helper"), None);
}

#[test]
fn index_directory() {
    let dir = create_test_dir();
    let classes = KnownClasses::from_directory(dir.path()).unwrap();
    assert_eq!(classes.len(), CLASSES.len());
    assert_eq!(
        classes.resolve_class("org.pkg.MyClass$Inner"),
        Some(ClassRef::new("org/pkg/MyClass$Inner"))
    );
}

#[test]
fn translate_against_class_path_chain() {
    let dir = create_test_dir();
    let jar_dir = TempDir::new().unwrap();
    let class_path: Vec<Box<dyn ClassResolver + Send + Sync>> = vec![
        Box::new(NopClassPath),
        Box::new(KnownClasses::java_lang()),
        Box::new(DirectoryClassPath::new(dir.path())),
        Box::new(JarClassPath::new(create_test_jar(jar_dir.path()))),
    ];
    let translator = Translator::with_imports(
        ClassPathChain::new(class_path),
        ["java.lang", "org.pkg", "org.other"],
    );
    assert_eq!(
        translator.translate_method("MyClass$Inner make(String name, Helper<T>[] helpers)"),
        Ok((
            "make".to_owned(),
            "(Ljava/lang/String;[Lorg/other/Helper;)Lorg/pkg/MyClass$Inner;".to_owned()
        ))
    );
    assert_eq!(
        translator.translate_type("Absent"),
        Err(Error::UnknownType("Absent".to_owned()))
    );
}

#[test]
fn concurrent_translation() {
    let dir = create_test_dir();
    let translator = Translator::with_imports(
        DirectoryClassPath::new(dir.path()),
        ["org.pkg", "org.other"],
    );
    let results: Vec<_> = (0..256)
        .into_par_iter()
        .map(|i| {
            let dims = "[]".repeat(i % 4);
            translator.translate_field(&format!("MyClass{dims} field{i}"))
        })
        .collect();
    for (i, result) in results.into_iter().enumerate() {
        let (name, descriptor) = result.unwrap();
        assert_eq!(name, format!("field{i}"));
        assert_eq!(
            descriptor,
            format!("{}Lorg/pkg/MyClass;", "[".repeat(i % 4))
        );
    }
}
