//! Student repository
//!
//! Each method issues exactly one statement against `mahasiswa`:
//! - create: INSERT, reports the assigned id when the driver knows it
//! - list: SELECT without ORDER BY (storage-default order)
//! - get: SELECT by id, `NotFound` when no row matches
//! - update/delete: no existence check, affected-row count returned

use sqlx::any::AnyRow;
use sqlx::{AnyPool, FromRow, Row};

use crate::models::Student;

/// Read a text column that the driver may report as bytes.
///
/// MySQL sends `TEXT` columns with a BLOB wire type, which the `Any` driver
/// surfaces as `Blob` rather than `Text`.
fn text_column(row: &AnyRow, column: &str) -> Result<String, sqlx::Error> {
    match row.try_get::<String, _>(column) {
        Ok(text) => Ok(text),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let bytes: Vec<u8> = row.try_get(column)?;
            String::from_utf8(bytes).map_err(|e| sqlx::Error::ColumnDecode {
                index: column.to_owned(),
                source: Box::new(e),
            })
        }
        Err(e) => Err(e),
    }
}

impl<'r> FromRow<'r, AnyRow> for Student {
    fn from_row(row: &'r AnyRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            full_name: text_column(row, "nama_lengkap")?,
            student_number: text_column(row, "nim")?,
            phone_number: text_column(row, "no_telp")?,
            address: text_column(row, "alamat")?,
            major: text_column(row, "jurusan")?,
        })
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },
}

/// Student repository
pub struct StudentRepo<'a> {
    pool: &'a AnyPool,
}

impl<'a> StudentRepo<'a> {
    pub fn new(pool: &'a AnyPool) -> Self {
        Self { pool }
    }

    /// Insert a record. Returns the storage-assigned id, if reported.
    ///
    /// `student_number` is not checked for uniqueness.
    pub async fn create(&self, student: &Student) -> Result<Option<i64>, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO mahasiswa (nama_lengkap, nim, no_telp, alamat, jurusan)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&student.full_name)
        .bind(&student.student_number)
        .bind(&student.phone_number)
        .bind(&student.address)
        .bind(&student.major)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_id();
        tracing::info!(id = ?id, nim = %student.student_number, "Mahasiswa created");
        Ok(id)
    }

    /// All records, in whatever order storage returns them.
    pub async fn list(&self) -> Result<Vec<Student>, DbError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT nama_lengkap, nim, no_telp, alamat, jurusan
            FROM mahasiswa
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(students)
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: i64) -> Result<Student, DbError> {
        sqlx::query_as::<_, Student>(
            r#"
            SELECT nama_lengkap, nim, no_telp, alamat, jurusan
            FROM mahasiswa
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound {
            resource: "Mahasiswa",
            id,
        })
    }

    /// Overwrite all five fields of `id`. Returns affected rows.
    ///
    /// A missing id is not an error. MySQL also reports 0 for an update
    /// that changes nothing, so the count is informational only.
    pub async fn update(&self, id: i64, student: &Student) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE mahasiswa
            SET nama_lengkap = ?, nim = ?, no_telp = ?, alamat = ?, jurusan = ?
            WHERE id = ?
            "#,
        )
        .bind(&student.full_name)
        .bind(&student.student_number)
        .bind(&student.phone_number)
        .bind(&student.address)
        .bind(&student.major)
        .bind(id)
        .execute(self.pool)
        .await?;

        tracing::debug!(id, rows = result.rows_affected(), "Mahasiswa updated");
        Ok(result.rows_affected())
    }

    /// Delete `id`. Returns affected rows; a missing id is not an error.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM mahasiswa WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "Mahasiswa deleted");
        Ok(result.rows_affected())
    }
}
