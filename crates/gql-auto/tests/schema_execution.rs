//! Integration tests that execute queries against exported schemas.

#![allow(dead_code)]

use async_graphql::Value;
use async_graphql::dynamic::{FieldFuture, ResolverContext, Schema};
use gql_auto::{
    Engine, GraphqlResolver, GraphqlTyped, ObjectConfig, ObjectType, Reflect, Resolver,
    SchemaType, add_field, with_args_in, with_description, with_resolver,
};
use serde::Serialize;
use serde_json::json;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Reflect, Serialize, Clone)]
#[graphql(custom, resolver)]
struct Money {
    pub cents: i64,
}

impl GraphqlTyped for Money {
    fn graphql_type() -> SchemaType {
        SchemaType::STRING
    }
}

impl GraphqlResolver for Money {
    fn graphql_resolve(ctx: &ResolverContext<'_>) -> async_graphql::Result<Option<Value>> {
        let Some(Value::Object(parent)) = ctx.parent_value.as_value() else {
            return Ok(None);
        };
        let cents = parent
            .get(ctx.field().name())
            .and_then(|money| match money {
                Value::Object(money) => money.get("cents").cloned(),
                _ => None,
            })
            .and_then(|cents| match cents {
                Value::Number(number) => number.as_i64(),
                _ => None,
            });

        Ok(cents.map(|cents| Value::from(format!("{}.{:02}", cents / 100, cents % 100))))
    }
}

#[derive(Reflect, Serialize, Clone)]
struct Friend {
    pub first_name: String,
    pub since: Option<u16>,
}

#[derive(Reflect, Serialize, Clone)]
struct Person {
    pub id: i32,
    pub first_name: String,
    #[serde(rename = "family")]
    pub last_name: String,
    #[graphql("!")]
    pub email: String,
    pub tags: Vec<String>,
    pub friends: Vec<Friend>,
    pub balance: Money,
    pub nickname: Option<String>,
    #[graphql("-")]
    pub password_hash: String,
}

#[derive(Reflect, Default)]
struct PersonArgs {
    #[graphql("!")]
    pub id: i32,
}

fn people() -> Vec<Person> {
    vec![
        Person {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            tags: vec!["math".into(), "poetry".into()],
            friends: vec![Friend {
                first_name: "Charles".into(),
                since: Some(1833),
            }],
            balance: Money { cents: 12345 },
            nickname: None,
            password_hash: "secret".into(),
        },
        Person {
            id: 2,
            first_name: "Alan".into(),
            last_name: "Turing".into(),
            email: "alan@example.com".into(),
            tags: Vec::new(),
            friends: Vec::new(),
            balance: Money { cents: 7 },
            nickname: Some("Prof".into()),
            password_hash: "secret".into(),
        },
    ]
}

fn to_value<T: Serialize>(value: &T) -> async_graphql::Result<Value> {
    Ok(Value::from_json(serde_json::to_value(value)?)?)
}

/// `Query { person(id: Int!): Person, people: [Person] }`
fn build_schema(engine: &Engine) -> Schema {
    let query = ObjectType::new(ObjectConfig::new("Query"));

    let person = engine
        .field::<Person>(&[
            &with_description("Look up a person by id"),
            &with_args_in(engine, &PersonArgs::default()),
            &with_resolver(Resolver::new(|ctx| {
                FieldFuture::new(async move {
                    let id = ctx.args.try_get("id")?.i64()?;
                    let found = people().into_iter().find(|p| i64::from(p.id) == id);
                    match found {
                        Some(person) => Ok(Some(to_value(&person)?)),
                        None => Ok(None),
                    }
                })
            })),
        ])
        .unwrap();
    add_field(&query, person);

    let list = gql_auto::Field::new("people", engine.array::<Person>(&[]).unwrap()).with_resolver(
        Resolver::new(|_ctx| FieldFuture::new(async move { Ok(Some(to_value(&people())?)) })),
    );
    add_field(&query, list);

    engine.schema_builder(&query, None).finish().unwrap()
}

async fn execute(schema: &Schema, query: &str) -> serde_json::Value {
    let response = schema.execute(query).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_query_resolves_through_default_resolvers() {
    let engine = Engine::new();
    let schema = build_schema(&engine);

    let data = execute(
        &schema,
        "{ person(id: 1) { firstName family email tags nickname } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "person": {
                "firstName": "Ada",
                "family": "Lovelace",
                "email": "ada@example.com",
                "tags": ["math", "poetry"],
                "nickname": null
            }
        })
    );
}

#[tokio::test]
async fn test_nested_objects_and_lists() {
    let engine = Engine::new();
    let schema = build_schema(&engine);

    let data = execute(
        &schema,
        "{ people { id friends { firstName since } } }",
    )
    .await;

    assert_eq!(
        data,
        json!({
            "people": [
                { "id": 1, "friends": [{ "firstName": "Charles", "since": 1833 }] },
                { "id": 2, "friends": [] }
            ]
        })
    );
}

#[tokio::test]
async fn test_custom_resolver_replaces_default() {
    let engine = Engine::new();
    let schema = build_schema(&engine);

    let data = execute(&schema, "{ people { balance } }").await;
    assert_eq!(
        data,
        json!({ "people": [{ "balance": "123.45" }, { "balance": "0.07" }] })
    );
}

#[tokio::test]
async fn test_missing_person_is_null() {
    let engine = Engine::new();
    let schema = build_schema(&engine);

    let data = execute(&schema, "{ person(id: 42) { email } }").await;
    assert_eq!(data, json!({ "person": null }));
}

#[tokio::test]
async fn test_excluded_field_is_not_queryable() {
    let engine = Engine::new();
    let schema = build_schema(&engine);

    let response = schema.execute("{ person(id: 1) { passwordHash } }").await;
    assert!(!response.errors.is_empty());
}

#[test]
fn test_required_argument_is_enforced() {
    let engine = Engine::new();
    let schema = build_schema(&engine);

    let response = tokio_test::block_on(schema.execute("{ person { email } }"));
    assert!(!response.errors.is_empty());
}

#[test]
fn test_sdl_lists_generated_types() {
    let engine = Engine::new();
    let sdl = build_schema(&engine).sdl();

    assert!(sdl.contains("type Person"), "{sdl}");
    assert!(sdl.contains("type Friend"), "{sdl}");
    assert!(sdl.contains("email: String!"), "{sdl}");
    assert!(sdl.contains("person(id: Int!): Person"), "{sdl}");
    assert!(sdl.contains("Look up a person by id"), "{sdl}");
}
