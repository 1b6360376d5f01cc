//! Member roster store

use tracing::debug;

use super::Collection;
use crate::domain::{Id, Member, NewMember};

#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    members: Collection<Member>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(members: Vec<Member>) -> Self {
        Self {
            members: Collection::seeded(members),
        }
    }

    pub fn all(&self) -> &[Member] {
        self.members.all()
    }

    pub fn get(&self, id: Id) -> Option<&Member> {
        self.members.get(id)
    }

    /// Name of the member, if the id resolves
    pub fn name_of(&self, id: Id) -> Option<&str> {
        self.get(id).map(|m| m.name.as_str())
    }

    pub fn add(&mut self, member: NewMember) -> Member {
        let member = self.members.insert_with(|id| member.with_id(id));
        debug!(member_id = member.id, name = %member.name, "Member added");
        member
    }

    pub fn update(&mut self, member: Member) -> bool {
        let member_id = member.id;
        let updated = self.members.replace(member);
        debug!(member_id, updated, "Member update");
        updated
    }

    /// Remove the member. Records referencing it elsewhere are left alone.
    pub fn delete(&mut self, id: Id) -> Option<Member> {
        let removed = self.members.remove(id);
        debug!(member_id = id, removed = removed.is_some(), "Member delete");
        removed
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
