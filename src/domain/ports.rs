use crate::utils::error::Result;

/// Byte-level access to named files. A missing file must surface as an
/// `IoError` with `ErrorKind::NotFound`.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;
    fn base_dir(&self) -> &str;
    fn top_k(&self) -> usize;
}
