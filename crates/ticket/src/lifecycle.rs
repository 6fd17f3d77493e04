// Path: crates/ticket/src/lifecycle.rs
//! Ticket lifecycle predicates.

use ticketchain_types::entities::Ticket;

/// A ticket is mature once the chain height reaches its `mature_by` height.
pub fn is_mature(ticket: &Ticket, height: u64) -> bool {
    ticket.mature_by <= height
}

/// A ticket is immature otherwise.
pub fn is_immature(ticket: &Ticket, height: u64) -> bool {
    !is_mature(ticket, height)
}

/// A ticket is active while unexpired: `expire_by == 0` (never, host tickets)
/// or `expire_by > height`.
pub fn is_active(ticket: &Ticket, height: u64) -> bool {
    ticket.expire_by == 0 || ticket.expire_by > height
}

/// A ticket is expired otherwise.
pub fn is_expired(ticket: &Ticket, height: u64) -> bool {
    !is_active(ticket, height)
}

/// Live = mature AND active (glossary).
pub fn is_live(ticket: &Ticket, height: u64) -> bool {
    is_mature(ticket, height) && is_active(ticket, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_types::decimal::Decimal;
    use ticketchain_types::entities::TicketKind;
    use ticketchain_types::ids::TxHash;

    fn validator_ticket(height: u64, min_mature_dur: u64, max_active_dur: u64) -> Ticket {
        let mature_by = height + min_mature_dur;
        Ticket {
            kind: TicketKind::Validator,
            hash: TxHash([1u8; 32]),
            proposer_pub_key: [1u8; 32],
            bls_pub_key: None,
            delegator: None,
            value: Decimal::from(25u64),
            commission_rate: 0.0,
            height,
            index: 0,
            mature_by,
            expire_by: mature_by + max_active_dur,
        }
    }

    fn host_ticket(height: u64, min_mature_dur: u64) -> Ticket {
        Ticket {
            expire_by: 0,
            ..validator_ticket(height, min_mature_dur, 0)
        }
    }

    #[test]
    fn validator_ticket_matures_and_expires_at_expected_heights() {
        let t = validator_ticket(10, 60, 40);
        assert_eq!(t.mature_by, 70);
        assert_eq!(t.expire_by, 110);
    }

    #[test]
    fn host_ticket_never_expires() {
        let t = host_ticket(10, 60);
        assert_eq!(t.expire_by, 0);
        assert!(is_active(&t, u64::MAX));
    }

    #[test]
    fn live_requires_both_mature_and_active() {
        let t = validator_ticket(10, 60, 40);
        assert!(!is_live(&t, 69));
        assert!(is_live(&t, 70));
        assert!(is_live(&t, 109));
        assert!(!is_live(&t, 110));
    }
}
