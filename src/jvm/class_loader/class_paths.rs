//! Implementations of [`ClassResolver`].

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

#[cfg(feature = "jar")]
use std::{
    collections::HashSet,
    fs::File,
    io::BufReader,
    sync::OnceLock,
};

#[cfg(feature = "jar")]
use tracing::debug;
use tracing::warn;
use walkdir::WalkDir;
#[cfg(feature = "jar")]
use zip::ZipArchive;

use crate::jvm::references::ClassRef;

use super::{ClassResolver, name_segments};

const CLASS_FILE_EXTENSION: &str = "class";
#[cfg(feature = "jar")]
const CLASS_FILE_SUFFIX: &str = ".class";

/// A class path that knows no classes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopClassPath;

impl ClassResolver for NopClassPath {
    fn resolve_class(&self, _name: &str) -> Option<ClassRef> {
        None
    }
}

/// A fixed table of classes.
#[derive(Debug, Clone, Default)]
pub struct KnownClasses {
    classes: HashMap<String, ClassRef>,
}

impl KnownClasses {
    /// Core classes of the `java.lang` package.
    pub const JAVA_LANG: &'static [&'static str] = &[
        "java/lang/Boolean",
        "java/lang/Byte",
        "java/lang/CharSequence",
        "java/lang/Character",
        "java/lang/Class",
        "java/lang/ClassLoader",
        "java/lang/Cloneable",
        "java/lang/Comparable",
        "java/lang/Double",
        "java/lang/Enum",
        "java/lang/Error",
        "java/lang/Exception",
        "java/lang/Float",
        "java/lang/Integer",
        "java/lang/Iterable",
        "java/lang/Long",
        "java/lang/Math",
        "java/lang/Number",
        "java/lang/Object",
        "java/lang/Record",
        "java/lang/Runnable",
        "java/lang/RuntimeException",
        "java/lang/Short",
        "java/lang/String",
        "java/lang/StringBuilder",
        "java/lang/System",
        "java/lang/Thread",
        "java/lang/Throwable",
        "java/lang/Void",
    ];

    /// Creates a table from the binary names of the classes, e.g., `java/util/Map$Entry`.
    pub fn new<I>(binary_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        binary_names.into_iter().collect()
    }

    /// Creates a table with the core classes of `java.lang`.
    #[must_use]
    pub fn java_lang() -> Self {
        Self::new(Self::JAVA_LANG.iter().copied())
    }

    /// Creates a table with every class file found under `directory`.
    /// The binary name of each class is its path relative to `directory` without the extension.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be traversed.
    pub fn from_directory(directory: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = directory.as_ref();
        let mut classes = Self::default();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().is_none_or(|ext| ext != CLASS_FILE_EXTENSION)
            {
                continue;
            }
            let Ok(relative) = path.with_extension("").strip_prefix(root).map(Path::to_owned)
            else {
                continue;
            };
            let segments: Option<Vec<_>> = relative
                .components()
                .map(|it| it.as_os_str().to_str())
                .collect();
            match segments {
                Some(segments) => classes.insert(segments.join("/")),
                None => warn!(path = %path.display(), "Skipping class file with non UTF-8 name"),
            }
        }
        Ok(classes)
    }

    /// Adds a class by its binary name.
    pub fn insert(&mut self, binary_name: impl Into<String>) {
        let class = ClassRef::new(binary_name);
        self.classes.insert(class.source_name(), class);
    }

    /// Returns the number of known classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if no class is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KnownClasses {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut classes = Self::default();
        iter.into_iter().for_each(|it| classes.insert(it));
        classes
    }
}

impl<S: Into<String>> Extend<S> for KnownClasses {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        iter.into_iter().for_each(|it| self.insert(it));
    }
}

impl ClassResolver for KnownClasses {
    fn resolve_class(&self, name: &str) -> Option<ClassRef> {
        self.classes.get(name).cloned()
    }
}

/// A class path that searches for class files in a directory.
#[derive(Debug)]
pub struct DirectoryClassPath {
    directory: PathBuf,
}

impl DirectoryClassPath {
    /// Create a new directory class path.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl ClassResolver for DirectoryClassPath {
    fn resolve_class(&self, name: &str) -> Option<ClassRef> {
        let segments = name_segments(name)?;
        let mut class_file_path = self.directory.clone();
        class_file_path.extend(&segments);
        class_file_path.set_extension(CLASS_FILE_EXTENSION);
        match class_file_path.try_exists() {
            Ok(true) if class_file_path.is_file() => Some(ClassRef::new(segments.join("/"))),
            Ok(_) => None,
            Err(err) => {
                warn!(path = %class_file_path.display(), %err, "Fail to check class file");
                None
            }
        }
    }
}

/// A class path that searches for class files in a JAR file.
///
/// The archive is read once, on the first lookup, and its class entries are kept in memory.
#[derive(Debug)]
#[cfg(feature = "jar")]
pub struct JarClassPath {
    jar_file: PathBuf,
    entries: OnceLock<HashSet<String>>,
}

#[cfg(feature = "jar")]
impl JarClassPath {
    /// Create a new JAR class path.
    pub fn new(jar_file: impl Into<PathBuf>) -> Self {
        Self {
            jar_file: jar_file.into(),
            entries: OnceLock::new(),
        }
    }

    fn open(&self) -> Option<ZipArchive<BufReader<File>>> {
        let jar_file = File::open(&self.jar_file)
            .inspect_err(|err| warn!(jar = %self.jar_file.display(), %err, "Fail to open JAR"))
            .ok()?;
        ZipArchive::new(BufReader::new(jar_file))
            .inspect_err(|err| warn!(jar = %self.jar_file.display(), %err, "Fail to read JAR"))
            .ok()
    }

    /// Returns the binary names of the classes in the archive, reading it on first use.
    /// An unreadable archive holds no classes.
    fn entries(&self) -> &HashSet<String> {
        self.entries.get_or_init(|| {
            let Some(jar_archive) = self.open() else {
                return HashSet::new();
            };
            let entries: HashSet<String> = jar_archive
                .file_names()
                .filter_map(|it| it.strip_suffix(CLASS_FILE_SUFFIX))
                .map(str::to_owned)
                .collect();
            debug!(jar = %self.jar_file.display(), classes = entries.len(), "Indexed JAR");
            entries
        })
    }
}

#[cfg(feature = "jar")]
impl ClassResolver for JarClassPath {
    fn resolve_class(&self, name: &str) -> Option<ClassRef> {
        let binary_name = name_segments(name)?.join("/");
        self.entries()
            .contains(&binary_name)
            .then(|| ClassRef::new(binary_name))
    }
}
