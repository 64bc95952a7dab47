// OpenAPI 3.0 description of the todo routes, served as JSON on /openapi and as a
// browsable Swagger UI page on /openapi/ui.

use axum::{Json, response::Html};
use serde_json::{Value, json};

pub fn document() -> Value {
    let todo_ref = json!({ "$ref": "#/components/schemas/ToDo" });
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    });
    let not_found = json!({ "description": "No todo with this id" });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "todos",
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        },
        "paths": {
            "/": {
                "post": {
                    "operationId": "createTodo",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": todo_ref } }
                    },
                    "responses": {
                        "201": {
                            "description": "Created todo",
                            "content": { "application/json": { "schema": todo_ref } }
                        }
                    }
                },
                "get": {
                    "operationId": "listTodos",
                    "responses": {
                        "200": {
                            "description": "All todos in insertion order",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": todo_ref }
                                }
                            }
                        }
                    }
                },
                "delete": {
                    "operationId": "deleteAllTodos",
                    "responses": { "200": { "description": "All todos deleted" } }
                }
            },
            "/{id}": {
                "get": {
                    "operationId": "getTodo",
                    "parameters": [id_param],
                    "responses": {
                        "200": {
                            "description": "The todo",
                            "content": { "application/json": { "schema": todo_ref } }
                        },
                        "404": not_found
                    }
                },
                "patch": {
                    "operationId": "updateTodo",
                    "parameters": [id_param],
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": todo_ref } }
                    },
                    "responses": {
                        "200": {
                            "description": "Updated todo",
                            "content": { "application/json": { "schema": todo_ref } }
                        },
                        "404": not_found
                    }
                },
                "delete": {
                    "operationId": "deleteTodo",
                    "parameters": [id_param],
                    "responses": {
                        "200": { "description": "Todo deleted" },
                        "404": not_found
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "ToDo": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "integer", "format": "int64", "readOnly": true },
                        "user": { "type": "string" },
                        "title": { "type": "string" },
                        "order": { "type": "integer", "format": "int64" },
                        "completed": { "type": "boolean" },
                        "url": { "type": "string", "readOnly": true }
                    }
                }
            }
        }
    })
}

pub async fn handle() -> Json<Value> {
    Json(document())
}

const SWAGGER_UI_VERSION: &str = "5.17.14";

pub fn ui_page(spec_url: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>todos API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui-bundle.js"></script>
  <script>
    window.ui = SwaggerUIBundle({{ url: "{spec_url}", dom_id: "#swagger-ui" }});
  </script>
</body>
</html>
"##
    )
}

pub async fn ui() -> Html<String> {
    Html(ui_page("/openapi"))
}
