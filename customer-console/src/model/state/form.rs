//! 客户表单状态
//!
//! 表单是所有操作的输入来源，也是单条记录结果的展示位置。
//! 字段值一律按文本保存，只有 `active` 在读出时转换为布尔值。

use customer_client::{Customer, CustomerId, FilterKey, NewCustomer, SearchFilter};

use crate::model::domain::{
    ACTIVE_OPTIONS, GENDER_OPTIONS, active_literal, parse_active_literal,
};

/// 表单字段（按显示顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Id,
    Username,
    Password,
    FirstName,
    LastName,
    Gender,
    Address,
    Email,
    Active,
}

impl FormField {
    pub const ALL: [Self; 9] = [
        Self::Id,
        Self::Username,
        Self::Password,
        Self::FirstName,
        Self::LastName,
        Self::Gender,
        Self::Address,
        Self::Email,
        Self::Active,
    ];

    /// 显示标签
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Gender => "Gender",
            Self::Address => "Address",
            Self::Email => "Email",
            Self::Active => "Active",
        }
    }

    /// 选择器字段的可选值；文本字段返回 `None`
    pub fn options(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Gender => Some(&GENDER_OPTIONS),
            Self::Active => Some(&ACTIVE_OPTIONS),
            _ => None,
        }
    }

    pub fn is_selector(self) -> bool {
        self.options().is_some()
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// 客户表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub id: String,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub address: String,
    pub email: String,
    /// `""`、`"True"` 或 `"False"`
    pub active: String,

    /// 当前获得输入焦点的字段
    pub focused: FormField,
}

impl CustomerForm {
    /// 用一条记录覆盖全部字段（包括 ID）
    pub fn populate(&mut self, customer: &Customer) {
        self.id = customer.id.to_string();
        self.username.clone_from(&customer.username);
        self.password.clone_from(&customer.password);
        self.first_name.clone_from(&customer.first_name);
        self.last_name.clone_from(&customer.last_name);
        self.gender.clone_from(&customer.gender);
        self.address.clone_from(&customer.address);
        self.email.clone_from(&customer.email);
        self.active = active_literal(customer.active).to_string();
    }

    /// 清空除 ID 以外的字段
    pub fn clear(&mut self) {
        for field in FormField::ALL {
            if field != FormField::Id {
                self.value_mut(field).clear();
            }
        }
    }

    /// 只清空 ID
    pub fn clear_identity(&mut self) {
        self.id.clear();
    }

    /// 读出请求体；ID 不在其中
    pub fn read(&self) -> NewCustomer {
        NewCustomer {
            username: self.username.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            address: self.address.clone(),
            email: self.email.clone(),
            active: parse_active_literal(&self.active),
        }
    }

    /// 去掉首尾空白后的 ID，为空时返回 `None`
    pub fn identity(&self) -> Option<CustomerId> {
        CustomerId::parse(&self.id)
    }

    /// 由非空字段组成的搜索条件（ID 与密码不参与搜索）
    pub fn search_filter(&self) -> SearchFilter {
        let active = (!self.active.is_empty()).then(|| parse_active_literal(&self.active));
        SearchFilter::new()
            .with(FilterKey::Username, self.username.as_str())
            .with(FilterKey::Email, self.email.as_str())
            .with(FilterKey::Address, self.address.as_str())
            .with(FilterKey::FirstName, self.first_name.as_str())
            .with(FilterKey::LastName, self.last_name.as_str())
            .with(FilterKey::Gender, self.gender.as_str())
            .with_active(active)
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Id => &self.id,
            FormField::Username => &self.username,
            FormField::Password => &self.password,
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Gender => &self.gender,
            FormField::Address => &self.address,
            FormField::Email => &self.email,
            FormField::Active => &self.active,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Id => &mut self.id,
            FormField::Username => &mut self.username,
            FormField::Password => &mut self.password,
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Gender => &mut self.gender,
            FormField::Address => &mut self.address,
            FormField::Email => &mut self.email,
            FormField::Active => &mut self.active,
        }
    }

    // === 编辑 ===

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    /// 文本字段追加字符；选择器字段忽略键入
    pub fn input(&mut self, c: char) {
        if !self.focused.is_selector() {
            self.value_mut(self.focused).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.focused.is_selector() {
            self.value_mut(self.focused).clear();
        } else {
            self.value_mut(self.focused).pop();
        }
    }

    pub fn cycle_next(&mut self) {
        self.cycle(true);
    }

    pub fn cycle_prev(&mut self) {
        self.cycle(false);
    }

    fn cycle(&mut self, forward: bool) {
        let field = self.focused;
        let Some(options) = field.options() else {
            return;
        };
        // 不在选项中的值（例如服务端返回的自定义性别）从头开始
        let current = options
            .iter()
            .position(|o| *o == self.value(field))
            .unwrap_or(0);
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        *self.value_mut(field) = options[next].to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        serde_json::from_value(serde_json::json!({
            "id": 17,
            "username": "alice",
            "password": "pw",
            "first_name": "Alice",
            "last_name": "Liddell",
            "gender": "FEMALE",
            "address": "1 Rabbit Hole",
            "email": "alice@example.com",
            "active": true
        }))
        .unwrap()
    }

    #[test]
    fn populate_then_read_round_trips() {
        let customer = alice();
        let mut form = CustomerForm::default();
        form.populate(&customer);

        let draft = form.read();
        assert_eq!(draft.username, "alice");
        assert_eq!(draft.password, "pw");
        assert_eq!(draft.first_name, "Alice");
        assert_eq!(draft.last_name, "Liddell");
        assert_eq!(draft.gender, "FEMALE");
        assert_eq!(draft.address, "1 Rabbit Hole");
        assert_eq!(draft.email, "alice@example.com");
        assert!(draft.active);
        assert_eq!(form.identity(), Some(customer.id));
    }

    #[test]
    fn populate_renders_active_in_title_case() {
        let mut customer = alice();
        customer.active = false;
        let mut form = CustomerForm::default();
        form.populate(&customer);
        assert_eq!(form.active, "False");
    }

    #[test]
    fn clear_keeps_identity() {
        let mut form = CustomerForm::default();
        form.populate(&alice());
        form.clear();

        assert_eq!(form.id, "17");
        for field in FormField::ALL.into_iter().skip(1) {
            assert_eq!(form.value(field), "", "{field:?} should be empty");
        }
    }

    #[test]
    fn clear_identity_touches_only_id() {
        let mut form = CustomerForm::default();
        form.populate(&alice());
        form.clear_identity();
        assert_eq!(form.id, "");
        assert_eq!(form.username, "alice");
    }

    #[test]
    fn identity_is_trimmed_and_blank_is_none() {
        let mut form = CustomerForm::default();
        assert_eq!(form.identity(), None);
        form.id = "   ".to_string();
        assert_eq!(form.identity(), None);
        form.id = " 42 ".to_string();
        assert_eq!(form.identity().map(|id| id.to_string()), Some("42".to_string()));
    }

    #[test]
    fn unset_active_reads_as_false() {
        let form = CustomerForm::default();
        assert!(!form.read().active);
    }

    #[test]
    fn search_filter_uses_only_filled_fields() {
        let mut form = CustomerForm::default();
        form.id = "9".to_string();
        form.password = "secret".to_string();
        form.email = "a@b.com".to_string();
        assert_eq!(form.search_filter().query_string(), "email=a@b.com");
    }

    #[test]
    fn search_filter_maps_active_selector() {
        let mut form = CustomerForm::default();
        assert_eq!(form.search_filter().active, None);
        form.active = "True".to_string();
        assert_eq!(form.search_filter().active, Some(true));
        form.active = "False".to_string();
        assert_eq!(form.search_filter().active, Some(false));
    }

    #[test]
    fn typing_edits_focused_text_field() {
        let mut form = CustomerForm::default();
        form.focus_next();
        assert_eq!(form.focused, FormField::Username);
        for c in "bobx".chars() {
            form.input(c);
        }
        form.backspace();
        assert_eq!(form.username, "bob");
    }

    #[test]
    fn selectors_cycle_and_ignore_typing() {
        let mut form = CustomerForm::default();
        form.focused = FormField::Active;
        form.input('x');
        assert_eq!(form.active, "");

        form.cycle_next();
        assert_eq!(form.active, "True");
        form.cycle_next();
        assert_eq!(form.active, "False");
        form.cycle_next();
        assert_eq!(form.active, "");
        form.cycle_prev();
        assert_eq!(form.active, "False");
    }

    #[test]
    fn gender_cycles_through_service_vocabulary() {
        let mut form = CustomerForm::default();
        form.focused = FormField::Gender;
        let seen: Vec<String> = (0..4)
            .map(|_| {
                form.cycle_next();
                form.gender.clone()
            })
            .collect();
        assert_eq!(seen, ["MALE", "FEMALE", "UNKNOWN", ""]);
    }

    #[test]
    fn focus_wraps_around() {
        let mut form = CustomerForm::default();
        form.focus_prev();
        assert_eq!(form.focused, FormField::Active);
        form.focus_next();
        assert_eq!(form.focused, FormField::Id);
    }
}
