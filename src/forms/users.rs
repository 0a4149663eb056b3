use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::page::PageState;
use crate::domain::types::PageSize;
use crate::domain::user::SearchFilter;
use crate::forms::FormError;

/// Inline message shown under a malformed email filter.
pub const INVALID_EMAIL_MESSAGE: &str = "请输入合法邮箱地址!";

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, PartialEq, Eq)]
/// Search form of the user management page, together with the pagination
/// state the page carries between requests.
pub struct SearchUserForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "请输入合法邮箱地址!"))]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_no: Option<usize>,
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub page_size: Option<usize>,
}

/// Unparsable paging values count as absent so the rest of the form survives.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

impl SearchUserForm {
    /// Checks the email rule and produces the filter to commit.
    pub fn to_filter(&self) -> Result<SearchFilter, FormError> {
        let filter = self.filter_unchecked();
        if filter.email.is_some() {
            self.validate().map_err(|err| {
                if err.field_errors().contains_key("email") {
                    FormError::InvalidEmail
                } else {
                    FormError::Validation(err)
                }
            })?;
        }
        Ok(filter)
    }

    /// Filter values as entered, without validation. Used for state that was
    /// already committed by an earlier request.
    pub fn filter_unchecked(&self) -> SearchFilter {
        SearchFilter::new(
            self.username.clone(),
            self.nick_name.clone(),
            self.email.clone(),
        )
    }

    pub fn page_state(&self, default_size: PageSize) -> PageState {
        PageState::from_raw(self.page_no, self.page_size, default_size)
    }

    /// Serializes a committed console state back into form fields.
    pub fn from_state(filter: &SearchFilter, page: PageState) -> Self {
        Self {
            username: filter.username.clone(),
            nick_name: filter.nick_name.clone(),
            email: filter.email.clone(),
            page_no: Some(page.page_no.get()),
            page_size: Some(page.page_size.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_email(email: &str) -> SearchUserForm {
        SearchUserForm {
            email: Some(email.to_string()),
            ..SearchUserForm::default()
        }
    }

    #[test]
    fn malformed_email_is_rejected() {
        let result = form_with_email("not-an-email").to_filter();
        assert!(matches!(result, Err(FormError::InvalidEmail)));
    }

    #[test]
    fn well_formed_email_is_accepted() {
        let filter = form_with_email("a@b.com").to_filter().expect("valid email");
        assert_eq!(filter.email.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn empty_email_means_no_constraint() {
        let filter = form_with_email("").to_filter().expect("empty email is allowed");
        assert_eq!(filter.email, None);
        assert!(SearchUserForm::default().to_filter().expect("empty form").is_empty());
    }

    #[cfg(feature = "server")]
    #[test]
    fn empty_query_values_deserialize_as_absent() {
        let form: SearchUserForm =
            serde_html_form::from_str("username=&nick_name=neo&email=&page_no=&page_size=20")
                .expect("valid query");

        assert_eq!(form.nick_name.as_deref(), Some("neo"));
        assert_eq!(form.page_no, None);
        assert_eq!(form.page_size, Some(20));
        assert_eq!(form.filter_unchecked().username, None);
    }

    #[cfg(feature = "server")]
    #[test]
    fn malformed_paging_values_keep_the_filter() {
        let form: SearchUserForm =
            serde_html_form::from_str("username=neo&page_no=abc&page_size=-1")
                .expect("lenient paging");

        assert_eq!(form.username.as_deref(), Some("neo"));
        assert_eq!(form.page_no, None);
        assert_eq!(form.page_size, None);
    }

    #[test]
    fn state_round_trips_through_form_fields() {
        let filter = SearchFilter::new(Some("neo".into()), None, Some("n@m.io".into()));
        let page = PageState::from_raw(Some(3), Some(20), PageSize::MIN);

        let form = SearchUserForm::from_state(&filter, page);

        assert_eq!(form.filter_unchecked(), filter);
        assert_eq!(form.page_state(PageSize::MIN), page);
    }
}
