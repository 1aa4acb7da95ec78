//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層（ハンドラー）から呼び出され、Domain 層と Repository を操作します。

pub mod create_session;
pub mod delete_session;
pub mod error;
pub mod get_settings;
pub mod put_settings;
pub mod recommend_buffer_size;
pub mod submit_device_profile;
pub mod update_session;

pub use create_session::CreateSessionUseCase;
pub use delete_session::DeleteSessionUseCase;
pub use error::UseCaseError;
pub use get_settings::GetSettingsUseCase;
pub use put_settings::PutSettingsUseCase;
pub use recommend_buffer_size::RecommendBufferSizeUseCase;
pub use submit_device_profile::SubmitDeviceProfileUseCase;
pub use update_session::UpdateSessionUseCase;
