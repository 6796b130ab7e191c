use anyhow::Result;
use serde_json::json;

use crate::common::{run_app_test, TestApp};

async fn create_member(app: &TestApp, name: &str, position: &str) -> Result<serde_json::Value> {
    let response = app
        .admin
        .post("committee")
        .json(&json!({ "name": name, "position": position }))
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 201, "creating committee member");
    Ok(response.json().await?)
}

#[tokio::test]
async fn committee_lists_officers_first() {
    run_app_test(|app| async move {
        create_member(&app, "Zed", "Groundskeeper").await?;
        create_member(&app, "Amy", "Treasurer").await?;
        create_member(&app, "Bea", "President").await?;
        create_member(&app, "Cal", "Bar Steward").await?;
        create_member(&app, "Dot", "Chairman").await?;

        let members: Vec<serde_json::Value> =
            app.client.get("committee").send().await?.json().await?;

        let order = members
            .iter()
            .map(|m| m["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, ["Bea", "Dot", "Amy", "Cal", "Zed"]);

        Ok(())
    })
    .await
}

#[tokio::test]
async fn committee_crud_requires_admin() {
    run_app_test(|app| async move {
        let payload = json!({ "name": "Joan", "position": "Secretary" });

        let response = app.member.post("committee").json(&payload).send().await?;
        assert_eq!(response.status().as_u16(), 403, "non-admin create");

        let response = app
            .admin
            .post("committee")
            .json(&json!({ "name": "", "position": "Secretary" }))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 400, "empty name");

        let created = create_member(&app, "Joan", "Secretary").await?;
        let id = created["id"].as_str().unwrap();

        let response = app
            .admin
            .put(&format!("committee/{id}"))
            .json(&json!({ "name": "Joan", "position": "Chairman" }))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 200);

        let response = app.admin.delete(&format!("committee/{id}")).send().await?;
        assert_eq!(response.status().as_u16(), 200);

        Ok(())
    })
    .await
}
