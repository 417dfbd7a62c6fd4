//! Built-in demo sheets, one per schema. Used by `--demo` and as fixtures.

/// Simplified 21-column standard export (header starts with "Empresa", so
/// the normalizer remaps it into the canonical 33-column layout).
pub const SAMPLE_STANDARD_SHEET: &str = "\
Empresa\tTicker\tSetor\tSubsetor\tLucro Atual\tLucro Projetado\tP/L Projetado\tP/L Médio 10a\tDesvio P/L Médio\tCAGR Lucros 5a\tDívida/EBITDA\tROE\tPayout Médio\tProventos 12m\tDividend Yield\tPreço Atual\tPreço Justo\tMargem de Segurança\tFrequência\tMês\tÚltima Atualização
Taesa\tTAEE11\tEnergia Elétrica\tTransmissão\t1,2\t1,3\t8,1\t9,4\t-13,8%\t4,5%\t2,9\t18,2%\t92%\tR$ 3,45\t9,8%\tR$ 34,80\tR$ 41,20\t18,4%\tTrimestral\tMar\t02/08/2026
Banco do Brasil\tBBAS3\tBancos\tBancos\t5,9\t6,2\t4,3\t6,1\t-29,5%\t11,2%\t\t19,8%\t41%\tR$ 2,61\t9,1%\tR$ 28,70\tR$ 39,90\t28,1%\tTrimestral\tFev\t02/08/2026
WEG\tWEGE3\tBens Industriais\tMotores\t1,4\t1,6\t28,7\t24,9\t15,3%\t17,9%\t0,1\t27,3%\t55%\tR$ 0,92\t1,7%\tR$ 52,30\tR$ 38,10\t-37,3%\tSemestral\tAgo\t02/08/2026
Petrobras\tPETR4\tPetróleo e Gás\tExploração\t12,8\t10,4\t3,9\t5,2\t-25,0%\t-2,1%\t0,8\t24,5%\t63%\tR$ 7,12\t18,9%\tR$ 37,60\tR$ 45,00\t16,4%\tTrimestral\tMai\t02/08/2026
Engie Brasil\tEGIE3\tEnergia Elétrica\tGeração\t3,1\t3,4\t9,7\t10,8\t-10,2%\t6,3%\t2,4\t23,1%\t78%\tR$ 2,95\t7,2%\tR$ 40,90\tR$ 44,50\t8,1%\tSemestral\tDez\t02/08/2026
Vale\tVALE3\tMineração\tMinerais Metálicos\t38,5\t33,2\t5,1\t7,7\t-33,8%\t3,4%\t0,5\t21,7%\t71%\tR$ 5,88\t10,4%\tR$ 56,40\tR$ 71,30\t20,9%\tSemestral\tSet\t02/08/2026
";

/// Neto-layout sheet (fixed 21 columns; the input header is discarded).
pub const SAMPLE_NETO_SHEET: &str = "\
Empresa\tTicker\tSetor\tSubsetor\tLucro Atual\tLucro Projetado\tP/L Projetado\tP/L Médio 10a\tDesvio P/L Médio\tCAGR Lucros 5a\tDívida/EBITDA\tROE\tPayout Médio\tProventos 12m\tDividend Yield\tPreço Atual\tPreço Justo\tMargem de Segurança\tUpside\tRecomendação\tAtualizado Em
Itaúsa\tITSA4\tHolding\tFinanceiro\t14,2\t15,1\t6,8\t8,3\t-18,1%\t8,9%\t0,3\t17,6%\t48%\tR$ 0,83\t8,1%\tR$ 10,25\tR$ 13,40\t23,5%\t30,7%\tComprar\t01/08/2026
Klabin\tKLBN11\tPapel e Celulose\tEmbalagens\t2,6\t2,9\t9,2\t11,5\t-20,0%\t5,7%\t3,8\t15,2%\t52%\tR$ 1,34\t6,2%\tR$ 21,60\tR$ 24,80\t12,9%\t14,8%\tManter\t01/08/2026
Sanepar\tSAPR11\tSaneamento\tÁgua e Esgoto\t1,5\t1,7\t5,4\t6,9\t-21,7%\t7,4%\t1,9\t13,8%\t38%\tR$ 2,02\t7,6%\tR$ 26,70\tR$ 34,10\t21,7%\t27,7%\tComprar\t01/08/2026
Transmissão Paulista\tTRPL4\tEnergia Elétrica\tTransmissão\t3,3\t3,5\t7,6\t8,8\t-13,6%\t3,9%\t1,2\t14,9%\t67%\tR$ 2,47\t8,8%\tR$ 28,10\tR$ 33,90\t17,1%\t20,6%\tComprar\t01/08/2026
";
