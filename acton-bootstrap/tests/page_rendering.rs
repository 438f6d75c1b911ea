//! Integration tests composing a full page from several helpers
//!
//! Every helper is created from one view and writes into one buffer.

use std::sync::Arc;

use acton_bootstrap::prelude::*;
use acton_bootstrap::testing::{assert_balanced, assert_in_order};

fn view() -> (View, Arc<MemoryFlashStore>) {
    let store = Arc::new(MemoryFlashStore::new());
    let view = View::default()
        .with_urls(StaticUrls::new("", "/users"))
        .with_flash_store(store.clone());
    (view, store)
}

#[test]
fn test_layout_chrome() -> Result<()> {
    let (view, store) = view();
    store.write(
        "Flash.flash",
        json!([{"message": "Saved <all>", "element": "flash/success"}]),
    );

    let mut page = String::new();

    let mut navbar = view.navbar();
    page.push_str(&navbar.create("Acme", Options::new())?);
    page.push_str(&navbar.begin_menu(Content::Empty, None, Options::new())?);
    page.push_str(&navbar.link("Users", "/users", Options::new())?);
    page.push_str(&navbar.link("Posts", "/posts", Options::new())?);
    page.push_str(&navbar.end_menu()?);
    page.push_str(&navbar.end()?);

    let mut breadcrumbs = view.breadcrumbs();
    breadcrumbs
        .add("Home", Some("/"), Options::new())
        .add("Users", None, Options::new());
    page.push_str(&breadcrumbs.render(Options::new())?);

    page.push_str(&view.flash().render("flash", Options::new().with("close", false))?);

    assert!(page.contains(r#"<li class="nav-item active"><a href="/users" class="nav-link">Users</a></li>"#));
    assert!(page.contains(r#"<li class="breadcrumb-item active">Users</li>"#));
    assert!(page.contains(r#"<div class="alert alert-success" role="alert">Saved &lt;all&gt;</div>"#));
    assert!(store.read("Flash.flash").is_none());
    assert_balanced(&page);
    Ok(())
}

#[test]
fn test_form_inside_modal() -> Result<()> {
    let (view, _) = view();
    let mut errors = ValidationErrors::new();
    errors.add("email", "is required");

    let mut modal = view.modal();
    let mut page = modal.create("Invite", Options::new().with("id", "invite"))?;

    let mut form = view.form();
    page.push_str(
        &FormBuilder::new("/invites", "post")
            .csrf_token("token")
            .errors(&errors)
            .field("email", InputType::Email)
            .required()
            .done()
            .select("role")
            .option("admin", "Admin")
            .option("member", "Member")
            .value("member")
            .done()
            .submit("Send")
            .build(&mut form)?,
    );
    page.push_str(&modal.end(Content::Empty, Options::new())?);

    assert!(page.starts_with(r#"<div class="modal fade" tabindex="-1" role="dialog" id="invite""#));
    assert!(page.contains(r#"<input type="hidden" name="_csrf_token" value="token">"#));
    assert!(page.contains(r#"<div class="form-group has-error email required">"#));
    assert!(page.contains(r#"<option value="member" selected="selected">Member</option>"#));
    assert!(page.ends_with("</form></div></div></div></div>"));
    assert_in_order(&page, &[r#"name="email""#, r#"name="role""#, r#"value="Send""#]);
    assert_balanced(&page);
    Ok(())
}

#[test]
fn test_tabs_with_cards_and_pagination() -> Result<()> {
    let (view, _) = view();
    let mut tabs = view.tabs();
    let mut card = view.card();

    let mut page = tabs.create(&["Active", "Archived"], Options::new().with("id", "list"))?;
    page.push_str(&tabs.pane(Content::Empty, Options::new())?);
    page.push_str(&card.create("Ada", Options::new())?);
    page.push_str(&card.end(Content::Empty, Options::new())?);
    page.push_str(&tabs.pane("Nothing archived", Options::new())?);
    page.push_str(&tabs.end()?);

    let mut paginator = view.paginator(PageParams::new("/users", 2, 3));
    page.push_str(&paginator.numbers(Options::new())?);

    assert!(page.contains(r#"<div class="tab-pane fade show active" id="list-1""#));
    assert!(page.contains(r#"<div class="card card-default"><div class="card-header">Ada</div>"#));
    assert!(page.contains(r#"<li class="active"><a href="/users?page=2">2</a></li>"#));
    assert!(tabs.is_closed());
    assert!(card.is_closed());
    assert_balanced(&page);
    Ok(())
}
