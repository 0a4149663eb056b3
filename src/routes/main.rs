use actix_web::{Responder, get};

use crate::dto::users::USER_MANAGE_PATH;
use crate::routes::redirect;

#[get("/")]
pub async fn index() -> impl Responder {
    redirect(USER_MANAGE_PATH)
}
