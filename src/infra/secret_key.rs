use anyhow::{ensure, Context as _, Result};
use rand::Rng;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read as _, Write as _};
use std::path::Path;

const FILE_NAME: &str = "rocket-secret-key.pem";
const PEM_LABEL: &str = "ROCKET SECRET KEY";
const KEY_LENGTH: usize = 64;

/// The key Rocket encrypts private cookies with.
/// Kept on disk so that sign-ins survive restarts.
pub(crate) struct SecretKey(pub(crate) Vec<u8>);

impl SecretKey {
    pub(crate) fn read_or_generate<R: Rng>(directory: &Path, rng: &mut R) -> Result<Self> {
        fs::create_dir_all(directory)
            .with_context(|| format!("failed to create {}", directory.display()))?;
        let path = directory.join(FILE_NAME);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                let key = Self::generate(rng);
                key.write(&mut file)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                Ok(key)
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                let mut file = File::open(&path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                Self::read(&mut file).with_context(|| format!("failed to read {}", path.display()))
            }
            Err(e) => Err(e).with_context(|| format!("failed to create {}", path.display())),
        }
    }

    fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut bytes = vec![0; KEY_LENGTH];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    fn write(&self, write: &mut dyn io::Write) -> Result<()> {
        let pem = pem::encode_string(PEM_LABEL, pem::LineEnding::LF, &self.0)?;
        Ok(write!(write, "{pem}")?)
    }

    fn read(read: &mut dyn io::Read) -> Result<Self> {
        let mut pem = Vec::new();
        read.read_to_end(&mut pem)?;
        let (label, key) = pem::decode_vec(&pem)?;
        ensure!(label == PEM_LABEL, "unexpected PEM label {label}");
        ensure!(key.len() >= KEY_LENGTH, "secret key is too short");
        Ok(Self(key))
    }
}
