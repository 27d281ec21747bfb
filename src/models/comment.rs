use diesel::prelude::*;
use serde::{ Deserialize, Serialize };
use uuid::Uuid;

use crate::{ models::Post, schema::comments };

#[derive(
    Debug,
    Clone,
    PartialEq,
    Queryable,
    Selectable,
    Identifiable,
    Associations,
    Serialize,
    Deserialize
)]
#[diesel(belongs_to(Post))]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub post_id: Uuid,
}

#[derive(Insertable, Clone)]
#[diesel(table_name = comments)]
pub struct NewComment {
    pub id: Uuid,
    pub text: String,
    pub post_id: Uuid,
}

impl NewComment {
    pub fn new(post_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            post_id,
        }
    }
}
