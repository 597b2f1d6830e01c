mod filesystem;

pub use filesystem::FilesystemKeyValueStore;
