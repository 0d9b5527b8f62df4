//! Flattened prompt body for the narrative generation service

use crate::format::rebate_summary;
use crate::proposal::{Horizon, ProposalRecord};

/// Flatten a record into the structured prompt schema the service expects
///
/// Only computed and entered fields are read; nothing in the returned text
/// feeds back into the record.
pub fn build_prompt(record: &ProposalRecord) -> String {
    let rebate = rebate_summary(&record.promo);
    let prepay = if record.promo.prepay.enabled {
        format!(
            "{}% (截止: {})",
            record.promo.prepay.rate, record.promo.prepay.deadline
        )
    } else {
        "N/A".to_string()
    };

    let mut prompt = format!(
        "客户资讯: {{ 姓名: \"{}\", 年龄: {} }}\n\
         计划名称: \"{}\"\n\
         保费数据: {{ 总额: {}, 缴费方式: \"{}\" }}\n\
         情境A数据:\n",
        record.client.name,
        record.client.age,
        record.plan_name,
        record.premium.total,
        record.premium.payment_type,
    );

    for horizon in Horizon::ALL {
        let value = record.scenario_a.get(horizon);
        prompt.push_str(&format!(
            "  第{}年: {{ 退保: {}, 身故: {} }}\n",
            horizon.years(),
            value.surrender,
            value.death,
        ));
    }

    prompt.push_str(&format!(
        "情境B数据:\n  每年提取: {}\n",
        record.scenario_b.annual_withdrawal
    ));
    for horizon in Horizon::ALL {
        let value = record.scenario_b.get(horizon);
        prompt.push_str(&format!(
            "  第{}年: {{ 累计提取: {}, 剩余价值: {} }}\n",
            horizon.years(),
            value.cumulative,
            value.remaining,
        ));
    }

    prompt.push_str("情境C数据:\n");
    for goal in &record.scenario_c.goals {
        prompt.push_str(&format!(
            "  第{}-{}年: {{ 用途: \"{}\", 年提取: {}, 累计: {}, 剩余: {} }}\n",
            goal.policy_year_start,
            goal.policy_year_end,
            goal.purpose,
            goal.amount,
            goal.cumulative,
            goal.remaining_value,
        ));
    }

    prompt.push_str(&format!(
        "推广优惠:\n  回赠: \"{}\"\n  预缴利率: \"{}\"\n",
        rebate, prepay
    ));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{apply_edit, ProposalEdit, WithdrawalInput};

    #[test]
    fn test_prompt_contains_computed_scenario_b() {
        let record = ProposalRecord::default();
        let record = apply_edit(&record, ProposalEdit::ClientName("Kelly".to_string()));
        let record = apply_edit(
            &record,
            ProposalEdit::ScenarioBInput(WithdrawalInput::AnnualWithdrawal(1000)),
        );

        let prompt = build_prompt(&record);
        assert!(prompt.contains("姓名: \"Kelly\""));
        // Start year defaults to 6, so year 10 holds five payments
        assert!(prompt.contains("第10年: { 累计提取: 5000"));
        assert!(prompt.contains("回赠: \"N/A\""));
    }

    #[test]
    fn test_prompt_prepay_with_deadline() {
        let mut record = ProposalRecord::default();
        record.promo.prepay.enabled = true;
        record.promo.prepay.rate = 4.5;
        record.promo.prepay.deadline = "2026-06-30".to_string();

        let prompt = build_prompt(&record);
        assert!(prompt.contains("预缴利率: \"4.5% (截止: 2026-06-30)\""));
    }
}
