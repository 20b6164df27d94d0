//! Known-deprecated WordPress API names. Static configuration data, loaded
//! once into a [`super::DeprecatedFunctions`] table.

pub(crate) const DEPRECATED_FUNCTIONS: &[&str] = &[
    "add_contextual_help",
    "add_option_whitelist",
    "the_attachment_links",
    "get_the_attachment_links",
    "get_link",
    "link_pages",
    "wp_get_links",
    "wp_get_linksbyname",
    "wp_list_bookmarks",
    "get_bookmarks",
    "wp_get_post_cats",
    "wp_set_post_cats",
    "is_taxonomy_hierarchical",
    "is_term",
    "user_pass_ok",
    "get_user_by_email",
    "get_user_by_login",
    "get_users_of_blog",
    "wp_get_profile",
    "get_profile",
    "get_others_unpublished_posts",
    "get_others_drafts",
    "wp_set_post_tags",
    "wp_get_post_tags",
    "get_all_category_ids",
    "__ngettext_noop",
    "like_escape",
    "wp_specialchars",
    "register_sidebar_widget",
    "unregister_sidebar_widget",
    "register_widget_control",
    "unregister_widget_control",
];
