#![allow(dead_code)]

use connect::schema::app;
use connect::{
    generate_unique_id, ManyRelation, Model, ModelId, OneRelation, Relation, RelationType, Result,
    Value, ValueRecord,
};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

impl User {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Model for User {
    fn id() -> ModelId {
        static ID: OnceLock<ModelId> = OnceLock::new();
        *ID.get_or_init(generate_unique_id)
    }

    fn schema() -> app::Model {
        app::Model::new(Self::id(), "User", "id")
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Self {
            id: record.expect_field("id")?.to_i64()?,
            name: record.expect_field("name")?.to_string()?,
        })
    }

    fn key_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub body: String,
}

impl Model for Comment {
    fn id() -> ModelId {
        static ID: OnceLock<ModelId> = OnceLock::new();
        *ID.get_or_init(generate_unique_id)
    }

    fn schema() -> app::Model {
        app::Model::new(Self::id(), "Comment", "id")
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        Ok(Self {
            id: record.expect_field("id")?.to_i64()?,
            body: record.take_field("body").as_str().unwrap_or_default().to_string(),
        })
    }

    fn key_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub author: OneRelation<User>,
    pub comments: ManyRelation<Comment>,
}

impl Post {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: OneRelation::new(Self::id(), "author", "id", None),
            comments: ManyRelation::new(Self::id(), "comments", "id", vec![]),
        }
    }
}

impl Model for Post {
    fn id() -> ModelId {
        static ID: OnceLock<ModelId> = OnceLock::new();
        *ID.get_or_init(generate_unique_id)
    }

    fn schema() -> app::Model {
        app::Model::new(Self::id(), "Post", "id")
            .with_relation(Relation::new("author", RelationType::BelongsTo, "User"))
            .with_relation(Relation::new("comments", RelationType::HasMany, "Comment"))
    }

    fn load(mut record: ValueRecord) -> Result<Self> {
        let mut post = Post::new(
            record.expect_field("id")?.to_i64()?,
            &record.expect_field("title")?.to_string()?,
        );

        post.author.load(record.take_field("author"))?;
        post.comments.load(record.take_field("comments"))?;

        Ok(post)
    }

    fn key_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.as_str().into()),
            _ => None,
        }
    }
}
