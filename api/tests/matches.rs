use anyhow::Result;
use chrono::{Days, Utc};
use serde_json::json;

use crate::common::{run_app_test, TestApp};

fn match_payload(team1: &str, team2: &str, days_from_now: i64, result: &str) -> serde_json::Value {
    let today = Utc::now().date_naive();
    let date = if days_from_now >= 0 {
        today + Days::new(days_from_now as u64)
    } else {
        today - Days::new((-days_from_now) as u64)
    };

    json!({
        "team1": team1,
        "team2": team2,
        "date": date.to_string(),
        "time": "14:00",
        "venue": "Village Green",
        "type": "League",
        "result": result,
        "division": "Division 2",
        "url": null,
        "image_url": null,
    })
}

async fn create_match(app: &TestApp, payload: &serde_json::Value) -> Result<serde_json::Value> {
    let response = app.admin.post("matches").json(payload).send().await?;
    assert_eq!(response.status().as_u16(), 201, "creating match");
    Ok(response.json().await?)
}

#[tokio::test]
async fn fixtures_filtering_and_pagination() {
    run_app_test(|app| async move {
        for n in 0..14 {
            let result = if n < 5 { "win" } else { "loss" };
            create_match(&app, &match_payload("Rovers", "Wanderers", -(n + 1), result)).await?;
        }

        // Unfiltered: fourteen matches make two pages of twelve and two.
        let body: serde_json::Value = app.client.get("matches").send().await?.json().await?;
        assert_eq!(body["matches"].as_array().unwrap().len(), 12);
        assert_eq!(body["current_page"], 1);
        assert_eq!(body["total_pages"], 2);
        assert_eq!(body["teams"], json!(["Rovers", "Wanderers"]));

        let body: serde_json::Value = app
            .client
            .get("matches?page=2")
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(body["matches"].as_array().unwrap().len(), 2);
        assert_eq!(body["current_page"], 2);

        // Five wins fit on a single page.
        let body: serde_json::Value = app
            .client
            .get("matches?result=win")
            .send()
            .await?
            .json()
            .await?;
        let wins = body["matches"].as_array().unwrap();
        assert_eq!(wins.len(), 5);
        assert!(wins.iter().all(|m| m["result"] == "win"));
        assert_eq!(body["total_pages"], 1);

        // A team nobody played against yields an empty zero-page view, but
        // the team dropdown still lists everyone.
        let body: serde_json::Value = app
            .client
            .get("matches?team=Vanguards")
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(body["matches"].as_array().unwrap().len(), 0);
        assert_eq!(body["total_pages"], 0);
        assert_eq!(body["teams"], json!(["Rovers", "Wanderers"]));

        Ok(())
    })
    .await
}

#[tokio::test]
async fn upcoming_returns_next_six() {
    run_app_test(|app| async move {
        for n in 0..8 {
            create_match(
                &app,
                &match_payload("Rovers", "Casuals", n + 1, "will be played"),
            )
            .await?;
        }
        create_match(&app, &match_payload("Rovers", "Casuals", -7, "loss")).await?;

        let upcoming: Vec<serde_json::Value> = app
            .client
            .get("matches/upcoming")
            .send()
            .await?
            .json()
            .await?;

        assert_eq!(upcoming.len(), 6);
        let dates = upcoming
            .iter()
            .map(|m| m["date"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "upcoming matches sorted by date");

        Ok(())
    })
    .await
}

#[tokio::test]
async fn match_crud_requires_admin() {
    run_app_test(|app| async move {
        let payload = match_payload("Rovers", "Athletic", 3, "will be played");

        let response = app.client.post("matches").json(&payload).send().await?;
        assert_eq!(response.status().as_u16(), 401, "anonymous create");

        let response = app.member.post("matches").json(&payload).send().await?;
        assert_eq!(response.status().as_u16(), 403, "non-admin create");

        let response = app
            .admin
            .post("matches")
            .json(&match_payload("", "Athletic", 3, "will be played"))
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 400, "empty team name");

        let created = create_match(&app, &payload).await?;
        let id = created["id"].as_str().unwrap();
        assert_eq!(created["result"], "will be played");

        let mut updated_payload = payload.clone();
        updated_payload["result"] = json!("draw");
        let response = app
            .admin
            .put(&format!("matches/{id}"))
            .json(&updated_payload)
            .send()
            .await?;
        assert_eq!(response.status().as_u16(), 200);

        let fetched: serde_json::Value = app
            .client
            .get(&format!("matches/{id}"))
            .send()
            .await?
            .json()
            .await?;
        assert_eq!(fetched["result"], "draw");

        let response = app.admin.delete(&format!("matches/{id}")).send().await?;
        assert_eq!(response.status().as_u16(), 200);

        let response = app.admin.delete(&format!("matches/{id}")).send().await?;
        assert_eq!(response.status().as_u16(), 404, "already deleted");

        Ok(())
    })
    .await
}
