//! Demo roster loaded when the service starts with seeding enabled

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    ClassName, Completion, Event, Id, Member, MemberUnit, Minutes, MinutesKind, Role, Specialty,
    SpecialtyArea, Unit,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub(super) fn members() -> Vec<Member> {
    use MemberUnit::*;
    use Role::*;

    [
        ("João da Silva", Falcons, date(2010, 5, 15), Pathfinder),
        ("Maria Oliveira", Eagles, date(1990, 8, 20), Director),
        ("Carlos Pereira", Tigers, date(1995, 2, 10), Counselor),
        ("Ana Costa", Falcons, date(2011, 11, 30), Pathfinder),
        ("Pedro Martins", Wolves, date(2009, 7, 22), Pathfinder),
        ("Sofia Ferreira", Eagles, date(1998, 3, 12), Counselor),
        ("Lucas Rodrigues", Tigers, date(2012, 1, 5), Pathfinder),
        ("Beatriz Almeida", Wolves, date(1992, 9, 18), Treasurer),
        ("Miguel Santos", Falcons, date(2010, 6, 25), Pathfinder),
        ("Laura Gonçalves", Eagles, date(1996, 12, 1), Instructor),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, unit, birth_date, role), id)| Member {
        id,
        name: name.to_string(),
        unit,
        birth_date,
        role,
    })
    .collect()
}

pub(super) fn units() -> Vec<(ClassName, Unit)> {
    vec![
        (
            ClassName::Amigo,
            Unit {
                id: 1,
                name: "Unidade Amizade".to_string(),
                counselor_id: Some(3),
            },
        ),
        (
            ClassName::Companheiro,
            Unit {
                id: 2,
                name: "Unidade Companheirismo".to_string(),
                counselor_id: Some(6),
            },
        ),
    ]
}

pub(super) fn specialties() -> Vec<Specialty> {
    use SpecialtyArea::*;

    [
        ("Nós e Amarras", Recreation, "knot"),
        ("Primeiros Socorros", HealthAndScience, "first-aid"),
        ("Acampamento I", Nature, "camping"),
        ("Culinária", HomeSkills, "cooking"),
        ("Arte de Contar Histórias Cristãs", Missionary, "storybook"),
        ("Pintura em Tela", Crafts, "painting"),
        ("Orientação", Nature, "compass"),
        ("Ordem Unida", Recreation, "marching"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, area, image), id)| Specialty {
        id,
        name: name.to_string(),
        area,
        image_url: format!("https://loremflickr.com/100/100/{image}"),
    })
    .collect()
}

pub(super) fn completions() -> Vec<Completion> {
    [
        (1, 3, date(2023, 10, 20), 3),
        (4, 3, date(2023, 10, 20), 3),
        (1, 1, date(2024, 2, 15), 6),
        (2, 2, date(2024, 5, 1), 10),
    ]
    .into_iter()
    .map(|(member_id, specialty_id, completed_on, instructor_id)| Completion {
        member_id,
        specialty_id,
        completed_on,
        instructor_id,
    })
    .collect()
}

pub(super) fn minutes() -> Vec<Minutes> {
    vec![
        Minutes {
            id: 1,
            title: "Planejamento do Acampamento de Unidades".to_string(),
            date: date(2024, 8, 1),
            kind: MinutesKind::BoardMeeting,
            description: "Reunião para definir a logística, atividades e orçamento para o \
                acampamento de unidades a ser realizado em Setembro. Foi discutido o local, \
                transporte, alimentação e a equipe de apoio. O orçamento preliminar foi aprovado."
                .to_string(),
            participant_ids: vec![2, 3, 6, 8, 10],
            attachments: vec![
                "orçamento_acampamento_v1.pdf".to_string(),
                "cronograma_atividades.docx".to_string(),
            ],
        },
        Minutes {
            id: 2,
            title: "Reunião de Abertura do Ano".to_string(),
            date: date(2024, 2, 10),
            kind: MinutesKind::RegularMeeting,
            description: "Reunião geral com todos os membros para dar as boas-vindas ao novo \
                ano de atividades. Apresentação da nova diretoria, do calendário de eventos e \
                das metas para o ano. Momento de louvor e dinâmicas de integração."
                .to_string(),
            participant_ids: (1..=10).collect(),
            attachments: vec!["calendario_2024.pdf".to_string()],
        },
    ]
}

pub(super) fn events() -> Vec<Event> {
    vec![Event {
        id: 1,
        label: "Acampamento de Unidades".to_string(),
        date: date(2024, 9, 14),
        location: "Parque da Represa".to_string(),
        fee: Decimal::new(5000, 2),
    }]
}

/// (event id, member id) sign-ups present at startup
pub(super) fn event_enrollments() -> Vec<(Id, Id)> {
    vec![(1, 1), (1, 4)]
}
