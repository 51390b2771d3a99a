use crate::domain::ports::Repository;
use crate::domain::records::{NewUser, User};
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{validate_email, validate_non_empty_string};
use tokio::sync::Mutex;

pub struct UserService<R: Repository<User>> {
    repository: R,
    // 重複 email 檢查與寫入必須一起完成
    write_lock: Mutex<()>,
}

impl<R: Repository<User>> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn register(&self, new_user: NewUser) -> Result<User> {
        validate_non_empty_string("first_name", &new_user.first_name)
            .and_then(|_| validate_non_empty_string("last_name", &new_user.last_name))
            .map_err(|e| AdvisorError::validation(e.to_string()))?;
        validate_email(&new_user.email)?;

        let email = new_user.email.trim().to_string();
        let _guard = self.write_lock.lock().await;
        if self.get_by_email(&email).await?.is_some() {
            return Err(AdvisorError::Conflict {
                message: format!("A user with email {} already exists", email),
            });
        }

        let user = self
            .repository
            .create(User {
                id: 0,
                first_name: new_user.first_name.trim().to_string(),
                last_name: new_user.last_name.trim().to_string(),
                email,
                birthdate: new_user.birthdate,
                role: new_user.role,
            })
            .await?;

        tracing::info!("👤 Registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    pub async fn get(&self, id: u64) -> Result<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| AdvisorError::not_found("User", id))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.trim();
        Ok(self
            .repository
            .list()
            .await?
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email)))
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.repository.list().await
    }
}
