use actix_web::web;

pub mod admin;
pub mod health;
pub mod invitations;
pub mod redirect;
pub mod reset_email;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/health").service(health::health));

    // Bearer credentials are checked inside the handlers that need them;
    // the redemption and redirect surfaces are deliberately unauthenticated.
    cfg.service(
        web::scope("/invitations")
            .service(invitations::validate::validate)
            .service(invitations::register::register)
            .service(invitations::create::create),
    );
    cfg.service(
        web::scope("/admin/users")
            .service(admin::update_role::update_role)
            .service(admin::delete_user::delete_user)
            .service(admin::list_users::list_users),
    );
    cfg.service(
        web::scope("/redirect")
            .service(redirect::invite_redirect)
            .service(redirect::reset_redirect),
    );
    cfg.service(web::scope("/auth").service(reset_email::send_reset_email));
}
