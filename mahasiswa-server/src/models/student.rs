//! Student record - the only entity this service manages

use serde::{Deserialize, Serialize};

/// The five descriptive fields of a student record.
///
/// The storage-assigned `id` is deliberately absent: it is never accepted
/// from clients and never echoed back.
///
/// Deserialization also accepts the column names (`nama_lengkap`, `nim`,
/// `no_telp`, `alamat`, `jurusan`) so older clients keep working. Sending
/// both spellings of one field is a duplicate-field error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(alias = "nama_lengkap")]
    pub full_name: String,

    #[serde(alias = "nim")]
    pub student_number: String,

    #[serde(alias = "no_telp")]
    pub phone_number: String,

    #[serde(alias = "alamat")]
    pub address: String,

    #[serde(alias = "jurusan")]
    pub major: String,
}
