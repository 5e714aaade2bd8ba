pub mod handlers;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use bookshelf_db::BookStoreArc;
use bookshelf_kernel::{InitCtx, Module};

/// Books module: CRUD over the `books` table through an injected store
pub struct BooksModule {
    store: BookStoreArc,
}

impl BooksModule {
    pub fn new(store: BookStoreArc) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            backend = ?ctx.settings.database.backend,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.store.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({
            "paths": {
                "/books": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All stored books",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            },
                            "404": error_response("No books stored")
                        }
                    },
                    "post": {
                        "summary": "Create a book",
                        "tags": ["Books"],
                        "requestBody": book_body(),
                        "responses": {
                            "201": {
                                "description": "Created; `Location` points at the new book",
                                "headers": {
                                    "Location": { "schema": { "type": "string" } }
                                }
                            },
                            "400": error_response("Malformed JSON"),
                            "500": error_response("Storage failure")
                        }
                    }
                },
                "/book/{id}": {
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "get": {
                        "summary": "Get a book",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "The book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "400": error_response("Missing or invalid id"),
                            "404": error_response("Book not found")
                        }
                    },
                    "put": {
                        "summary": "Replace title and author of a book",
                        "tags": ["Books"],
                        "requestBody": book_body(),
                        "responses": {
                            "200": { "description": "Updated" },
                            "400": error_response("Missing or invalid id"),
                            "404": error_response("Book not found"),
                            "500": error_response("Malformed JSON or storage failure")
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Books"],
                        "responses": {
                            "204": { "description": "Deleted" },
                            "400": error_response("Missing or invalid id"),
                            "404": error_response("Book not found")
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Author": {
                        "type": "object",
                        "properties": {
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" }
                        },
                        "required": ["first_name", "last_name"]
                    },
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": {
                                "type": "string",
                                "description": "Integer id assigned by storage, as a string"
                            },
                            "title": { "type": "string" },
                            "author": { "$ref": "#/components/schemas/Author" }
                        },
                        "required": ["id", "title", "author"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

fn error_response(description: &str) -> serde_json::Value {
    serde_json::json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

fn book_body() -> serde_json::Value {
    serde_json::json!({
        "required": true,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/Book" }
            }
        }
    })
}

/// Create a new instance of the books module
pub fn create_module(store: BookStoreArc) -> Arc<dyn Module> {
    Arc::new(BooksModule::new(store))
}
