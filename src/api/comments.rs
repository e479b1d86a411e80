use serde_json::Value;

use crate::api::ApiClient;
use crate::error::AppResult;
use crate::models::{Comment, CommentForm};
use crate::utils::api_url::api_path;

pub struct CommentsApi;

impl CommentsApi {
    pub async fn list(api: &ApiClient, task_id: &str) -> AppResult<Vec<Comment>> {
        api.get(&api_path(&["tasks", task_id, "comments"])?).await
    }

    pub async fn create(api: &ApiClient, task_id: &str, form: &CommentForm) -> AppResult<Comment> {
        api.post(&api_path(&["tasks", task_id, "comments"])?, form)
            .await
    }

    pub async fn update(
        api: &ApiClient,
        task_id: &str,
        comment_id: &str,
        form: &CommentForm,
    ) -> AppResult<Comment> {
        api.put(&api_path(&["tasks", task_id, "comments", comment_id])?, form)
            .await
    }

    pub async fn delete(api: &ApiClient, task_id: &str, comment_id: &str) -> AppResult<Value> {
        api.delete(&api_path(&["tasks", task_id, "comments", comment_id])?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::testing::scripted_client;
    use crate::error::AppError;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn comment_paths() {
        let (transport, api) = scripted_client();
        transport.respond(Ok(json!({"id": "c1", "content": "hi"})));
        let form = CommentForm { content: "hi".into() };
        CommentsApi::create(&api, "t1", &form).await.unwrap();
        // an empty body cannot be decoded into a comment
        let err = CommentsApi::update(&api, "t1", "c1", &form).await.unwrap_err();
        assert!(matches!(err, AppError::Decode(_)));

        let requests = transport.requests();
        assert_eq!(requests[0].path, "/tasks/t1/comments");
        assert_eq!(requests[0].body, Some(json!({"content": "hi"})));
        assert_eq!(requests[1].method, Method::PUT);
        assert_eq!(requests[1].path, "/tasks/t1/comments/c1");
    }
}
