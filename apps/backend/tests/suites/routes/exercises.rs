use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::unique_helpers::unique_str;
use serde_json::{json, Value};

use crate::common::{assert_error, json_body};
use crate::support::auth::register_account;
use crate::support::fixtures::create_exercise;
use crate::support::{build_test_state, create_test_app};

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[actix_web::test]
async fn filters_by_muscle_group_and_difficulty() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let staff = register_account(&app, "staff").await;

    let legs = unique_str("legs");
    let squat = create_exercise(&app, &staff, &legs, "beginner").await;
    let lunge = create_exercise(&app, &staff, &legs, "advanced").await;
    let press = create_exercise(&app, &staff, "chest", "beginner").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/exercises?muscle_group={legs}"))
        .to_request();
    let by_group = ids(&json_body(test::call_service(&app, req).await, StatusCode::OK).await);
    assert!(by_group.contains(&squat) && by_group.contains(&lunge));
    assert!(!by_group.contains(&press));

    let req = test::TestRequest::get()
        .uri(&format!(
            "/api/v1/exercises?muscle_group={legs}&difficulty=beginner"
        ))
        .to_request();
    let beginner_legs = ids(&json_body(test::call_service(&app, req).await, StatusCode::OK).await);
    assert_eq!(beginner_legs, vec![squat]);

    // Empty filter values mean "no filter"
    let req = test::TestRequest::get()
        .uri("/api/v1/exercises?muscle_group=&difficulty=&limit=1000")
        .to_request();
    let all = ids(&json_body(test::call_service(&app, req).await, StatusCode::OK).await);
    assert!(all.contains(&squat) && all.contains(&lunge) && all.contains(&press));
    Ok(())
}

#[actix_web::test]
async fn muscle_groups_are_distinct_and_sorted() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let staff = register_account(&app, "staff").await;

    let legs = unique_str("legs");
    let chest = unique_str("chest");
    create_exercise(&app, &staff, &legs, "").await;
    create_exercise(&app, &staff, &chest, "").await;
    create_exercise(&app, &staff, &legs, "").await;

    let req = test::TestRequest::get()
        .uri("/api/v1/exercises/muscle-groups")
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    let groups: Vec<String> = serde_json::from_value(body)?;

    assert_eq!(groups.iter().filter(|g| **g == legs).count(), 1);
    assert_eq!(groups.iter().filter(|g| **g == chest).count(), 1);
    let mut sorted = groups.clone();
    sorted.sort();
    assert_eq!(groups, sorted);
    Ok(())
}

#[actix_web::test]
async fn exercise_validation_rules() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let staff = register_account(&app, "staff").await;

    let cases = [
        (
            json!({ "name": "Plank", "muscle_group": "core", "difficulty": "extreme" }),
            "INVALID_DIFFICULTY",
            "Difficulty must be one of beginner, intermediate, advanced",
        ),
        (
            json!({ "name": "Plank", "muscle_group": "core", "image_url": "ftp://x/y.png" }),
            "INVALID_URL",
            "Image URL must be an http(s) URL",
        ),
        (
            json!({ "name": "Plank", "muscle_group": "  " }),
            "VALIDATION_ERROR",
            "Muscle group is required",
        ),
    ];

    for (payload, code, message) in cases {
        let req = test::TestRequest::post()
            .uri("/api/v1/exercises")
            .insert_header(staff.bearer())
            .set_json(&payload)
            .to_request();
        assert_error(
            test::call_service(&app, req).await,
            StatusCode::BAD_REQUEST,
            code,
            message,
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn update_get_and_delete_exercise() -> Result<(), Box<dyn std::error::Error>> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await;
    let staff = register_account(&app, "staff").await;
    let id = create_exercise(&app, &staff, "back", "intermediate").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/v1/exercises/{id}"))
        .insert_header(staff.bearer())
        .set_json(json!({ "equipment": "barbell", "video_url": "https://videos.example/row" }))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["equipment"], "barbell");
    assert_eq!(body["muscle_group"], "back");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/exercises/{id}"))
        .to_request();
    let body = json_body(test::call_service(&app, req).await, StatusCode::OK).await;
    assert_eq!(body["video_url"], "https://videos.example/row");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/exercises/{id}"))
        .insert_header(staff.bearer())
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::NO_CONTENT
    );

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/exercises/{id}"))
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::NOT_FOUND,
        "EXERCISE_NOT_FOUND",
        "Exercise not found",
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/exercises/zero")
        .to_request();
    assert_error(
        test::call_service(&app, req).await,
        StatusCode::BAD_REQUEST,
        "INVALID_ID",
        "Invalid exercise ID",
    )
    .await;
    Ok(())
}
