use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Deserialize)]
pub struct BucketListForm {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBucketForm {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ActivityForm {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateActivityForm {
    pub name: String,
    pub title: String,
    pub description: String,
}

/// `?name=` selecting a bucket list.
#[derive(Debug, Deserialize)]
pub struct BucketListQuery {
    pub name: String,
}

/// Prefill for the edit-bucket form.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBucketQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Prefill for the edit-activity form.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateActivityQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}
