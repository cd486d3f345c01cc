pub mod invitation;
pub mod member;
pub mod push_token;
pub mod role;
pub mod user;
pub mod ward;

/*
 A ward owns everything: its users, its invitations, and the scheduling data
 the rest of the app hangs off it. Nobody exists outside a ward.
 Bishopric and secretary accounts run things, observers can only look.
 New people only ever get in through an invitation token.
 */
